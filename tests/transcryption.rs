// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use assert_matches::assert_matches;
use dusk_bytes::Serializable;
use pep_core::{
    decrypt, decrypt_data, decrypt_pseudonym, encrypt, encrypt_data,
    encrypt_pseudonym, make_global_keys, make_session_keys, pseudonymize,
    rekey_data, rerandomize_and_pseudonymize, rerandomize_data,
    rerandomize_pseudonym, DataPoint, ElGamal, EncryptedDataPoint,
    EncryptedPseudonym, EncryptionContext, EncryptionSecret, Error,
    GlobalKeyPair, GroupElement, Pseudonym, PseudonymizationContext,
    PseudonymizationInfo, PseudonymizationSecret, RekeyInfo, SessionKeyPair,
    G,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Setup {
    global: GlobalKeyPair,
    session1: SessionKeyPair,
    session2: SessionKeyPair,
    info: PseudonymizationInfo,
}

fn setup(rng: &mut StdRng) -> Setup {
    let global = make_global_keys(rng);
    let enc_secret = EncryptionSecret::from("secret");

    let session1 = make_session_keys(
        &global.secret,
        &EncryptionContext::from("session1"),
        &enc_secret,
    );
    let session2 = make_session_keys(
        &global.secret,
        &EncryptionContext::from("session2"),
        &enc_secret,
    );

    let info = PseudonymizationInfo::new(
        &PseudonymizationContext::from("context1"),
        &PseudonymizationContext::from("context2"),
        &EncryptionContext::from("session1"),
        &EncryptionContext::from("session2"),
        &PseudonymizationSecret::from("pseudoSecret"),
        &enc_secret,
    );

    Setup {
        global,
        session1,
        session2,
        info,
    }
}

#[test]
fn high_level_scenario() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1,
        session2,
        info,
        ..
    } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);

    let data = DataPoint::new(GroupElement::random(&mut rng))?;
    let enc_data = encrypt_data(&data, &session1.public, &mut rng);

    assert_eq!(
        pseudo.encode_as_hex(),
        decrypt_pseudonym(&enc_pseudo, &session1.secret)?.encode_as_hex()
    );
    assert_eq!(
        data.encode_as_hex(),
        decrypt_data(&enc_data, &session1.secret)?.encode_as_hex()
    );

    let rekey_info = RekeyInfo::from_pseudo_info(&info);
    let rekeyed = rekey_data(&enc_data, &rekey_info);

    assert_eq!(
        data.encode_as_hex(),
        decrypt_data(&rekeyed, &session2.secret)?.encode_as_hex()
    );

    let pseudonymized = pseudonymize(&enc_pseudo, &info);
    let pseudonymized_dec =
        decrypt_pseudonym(&pseudonymized, &session2.secret)?;

    assert_ne!(pseudo.encode_as_hex(), pseudonymized_dec.encode_as_hex());

    let rev_pseudonymized = pseudonymize(&pseudonymized, &info.rev());
    let rev_pseudonymized_dec =
        decrypt_pseudonym(&rev_pseudonymized, &session1.secret)?;

    assert_eq!(pseudo.encode_as_hex(), rev_pseudonymized_dec.encode_as_hex());

    Ok(())
}

#[test]
fn pseudonymize_reverse_is_bit_exact() {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup { session1, info, .. } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);

    let moved = pseudonymize(&enc_pseudo, &info);
    let there_and_back = pseudonymize(&moved, &info.rev());

    assert_eq!(enc_pseudo.to_bytes(), there_and_back.to_bytes());
    assert_eq!(info, info.rev().rev());
}

#[test]
fn pseudonyms_are_stable_per_context() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1,
        session2,
        info,
        ..
    } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);

    // two independent encryptions of the same subject end up as the same
    // pseudonym in the destination context
    let first = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);
    let second = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);
    assert_ne!(first, second);

    let first =
        decrypt_pseudonym(&pseudonymize(&first, &info), &session2.secret)?;
    let second =
        decrypt_pseudonym(&pseudonymize(&second, &info), &session2.secret)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn same_pseudonymization_context_keeps_the_pseudonym() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1, session2, ..
    } = setup(&mut rng);

    let info = PseudonymizationInfo::new(
        &PseudonymizationContext::from("context1"),
        &PseudonymizationContext::from("context1"),
        &EncryptionContext::from("session1"),
        &EncryptionContext::from("session2"),
        &PseudonymizationSecret::from("pseudoSecret"),
        &EncryptionSecret::from("secret"),
    );

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);
    let moved = pseudonymize(&enc_pseudo, &info);

    assert_eq!(pseudo, decrypt_pseudonym(&moved, &session2.secret)?);

    Ok(())
}

#[test]
fn rekey_info_reverse() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1, session2, ..
    } = setup(&mut rng);

    let info = RekeyInfo::new(
        &EncryptionContext::from("session1"),
        &EncryptionContext::from("session2"),
        &EncryptionSecret::from("secret"),
    );
    assert_eq!(info, RekeyInfo::from(&setup(&mut rng).info));

    let data = DataPoint::random(&mut rng);
    let enc_data = encrypt_data(&data, &session1.public, &mut rng);

    let rekeyed = rekey_data(&enc_data, &info);
    assert_eq!(data, decrypt_data(&rekeyed, &session2.secret)?);

    let back = rekey_data(&rekeyed, &info.rev());
    assert_eq!(enc_data, back);

    Ok(())
}

#[test]
fn global_keys_encrypt_and_decrypt() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup { global, .. } = setup(&mut rng);

    let data = DataPoint::random(&mut rng);
    let encrypted: EncryptedDataPoint =
        encrypt(&data, &global.public, &mut rng);

    assert_eq!(data, decrypt(&encrypted, &global.secret)?);

    Ok(())
}

#[test]
fn rerandomized_ciphertexts_decrypt_identically() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup { session1, .. } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);
    let rerandomized =
        rerandomize_pseudonym(&enc_pseudo, &session1.public, &mut rng);

    assert_ne!(enc_pseudo, rerandomized);
    assert_eq!(pseudo, decrypt_pseudonym(&rerandomized, &session1.secret)?);

    let data = DataPoint::random(&mut rng);
    let enc_data = encrypt_data(&data, &session1.public, &mut rng);
    let rerandomized = rerandomize_data(&enc_data, &session1.public, &mut rng);

    assert_ne!(enc_data, rerandomized);
    assert_eq!(data, decrypt_data(&rerandomized, &session1.secret)?);

    Ok(())
}

#[test]
fn identity_is_rejected() {
    let identity = GroupElement::identity();

    assert_matches!(Pseudonym::new(identity), Err(Error::InvalidValue));
    assert_matches!(DataPoint::new(identity), Err(Error::InvalidValue));
    assert_matches!(
        Pseudonym::from_bytes(&identity.to_bytes()),
        Err(Error::InvalidValue)
    );
    assert_matches!(
        DataPoint::decode_from_hex(&identity.encode_as_hex()),
        Err(Error::InvalidValue)
    );
}

#[test]
fn decryption_to_identity_is_a_mismatch() {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup { session1, .. } = setup(&mut rng);

    // c = y·b decrypts to the identity under y
    let session_pk = *pep_core::PublicKey::value(&session1.public);
    let forged = EncryptedPseudonym::new(ElGamal {
        b: G,
        c: session_pk,
    });

    assert_matches!(
        decrypt_pseudonym(&forged, &session1.secret),
        Err(Error::DecryptionMismatch)
    );
}

#[test]
fn encrypted_encoding() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup { session1, .. } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);
    let enc_data =
        encrypt_data(&DataPoint::random(&mut rng), &session1.public, &mut rng);

    assert_eq!(
        enc_pseudo,
        EncryptedPseudonym::from_bytes(&enc_pseudo.to_bytes())?
    );
    assert_eq!(
        enc_data,
        EncryptedDataPoint::decode_from_hex(&enc_data.encode_as_hex())?
    );
    assert_eq!(enc_pseudo.encode_as_hex().len(), 128);

    Ok(())
}

#[test]
fn identifiers_map_to_stable_pseudonyms() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1,
        session2,
        info,
        ..
    } = setup(&mut rng);

    let alice = Pseudonym::from_identifier(b"alice@example.org")?;
    assert_eq!(alice, Pseudonym::from_identifier(b"alice@example.org")?);
    assert_ne!(alice, Pseudonym::from_identifier(b"bob@example.org")?);

    // two parties pseudonymizing the same identifier get the same result
    let first = encrypt_pseudonym(&alice, &session1.public, &mut rng);
    let second = encrypt_pseudonym(
        &Pseudonym::from_identifier(b"alice@example.org")?,
        &session1.public,
        &mut rng,
    );

    assert_eq!(
        decrypt_pseudonym(&pseudonymize(&first, &info), &session2.secret)?,
        decrypt_pseudonym(&pseudonymize(&second, &info), &session2.secret)?
    );

    let hash = [7u8; 64];
    assert_eq!(
        Pseudonym::from_hash(&hash)?.value(),
        DataPoint::from_hash(&hash)?.value()
    );
    assert_matches!(
        Pseudonym::from_hash(&[0u8; 64]),
        Err(Error::InvalidValue)
    );

    Ok(())
}

#[test]
fn data_payloads_survive_rekeying() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1,
        session2,
        info,
        ..
    } = setup(&mut rng);

    let message = b"the quick brown fox jumps over the lazy dog";
    let points = DataPoint::from_payloads(message)?;
    assert_eq!(points.len(), 3);

    let rekey_info = RekeyInfo::from(&info);
    let mut received = Vec::with_capacity(points.len());
    for point in &points {
        let encrypted = encrypt_data(point, &session1.public, &mut rng);
        let rekeyed = rekey_data(&encrypted, &rekey_info);
        received.push(decrypt_data(&rekeyed, &session2.secret)?);
    }

    let data = DataPoint::to_payloads(&received)?;
    assert_eq!(&data[..message.len()], &message[..]);
    assert!(data[message.len()..].iter().all(|b| *b == 0));

    let payload = *b"sixteen bytes!!!";
    let point = DataPoint::from_payload(&payload)?;
    assert_eq!(point.to_payload(), Some(payload));

    assert_eq!(DataPoint::random(&mut rng).to_payload(), None);
    assert_matches!(
        DataPoint::to_payloads(&[point, DataPoint::random(&mut rng)]),
        Err(Error::InvalidData)
    );

    Ok(())
}

#[test]
fn rerandomized_pseudonymization() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let Setup {
        session1,
        session2,
        info,
        ..
    } = setup(&mut rng);

    let pseudo = Pseudonym::random(&mut rng);
    let enc_pseudo = encrypt_pseudonym(&pseudo, &session1.public, &mut rng);

    let plain = pseudonymize(&enc_pseudo, &info);
    let rerandomized = rerandomize_and_pseudonymize(
        &enc_pseudo,
        &session1.public,
        &info,
        &mut rng,
    );

    assert_ne!(plain, rerandomized);
    assert_eq!(
        decrypt_pseudonym(&plain, &session2.secret)?,
        decrypt_pseudonym(&rerandomized, &session2.secret)?
    );

    let back = pseudonymize(&rerandomized, &info.rev());
    assert_eq!(pseudo, decrypt_pseudonym(&back, &session1.secret)?);

    Ok(())
}
