// -*- mode: rust; -*-
//
// This file is part of ed25519-verifier.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Integration tests for ed25519-verifier.

use ed25519_verifier::*;

use hex_literal::hex;

use curve25519_core::{
    constants::{BASEPOINT_ORDER_BYTES, ED25519_BASEPOINT_POINT},
    edwards::{CompressedEdwardsY, EdwardsPoint},
    scalar::Scalar,
    traits::IsIdentity,
};

use sha2::{Digest, Sha512};

const ZIP215: Options = Options {
    zip215_verify: true,
};

/// Add \\( \ell \\) to the little-endian integer in `s`.
fn add_order(s: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut carry = 0u16;
    for i in 0..32 {
        let sum = s[i] as u16 + BASEPOINT_ORDER_BYTES[i] as u16 + carry;
        out[i] = sum as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0);
    out
}

mod vectors {
    use super::*;

    use std::ops::Neg;

    // RFC 8032, section 7.1, TESTs 1 to 3.
    #[test]
    fn rfc8032_test_vectors() {
        let cases: [(&[u8], &[u8], &[u8]); 3] = [
            (
                &hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
                b"",
                &hex!(
                    "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
                    "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
                ),
            ),
            (
                &hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
                &hex!("72"),
                &hex!(
                    "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da"
                    "085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
                ),
            ),
            (
                &hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
                &hex!("af82"),
                &hex!(
                    "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac"
                    "18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a"
                ),
            ),
        ];

        for (i, (public_key, message, signature)) in cases.iter().enumerate() {
            assert!(
                verify(public_key, message, signature, &Options::default()),
                "RFC 8032 test {} failed",
                i + 1
            );
            assert!(verify(public_key, message, signature, &ZIP215));

            let key = VerifyingKey::try_from(*public_key).unwrap();
            let sig = Signature::try_from(*signature).unwrap();
            assert!(key.verify_strict(message, &sig));
            assert_eq!(sig.to_bytes().as_slice(), *signature);

            // S + L encodes the same residue, and is refused by every policy.
            let mut unreduced = sig.to_bytes();
            let s_plus_l = add_order(sig.s_bytes());
            unreduced[32..].copy_from_slice(&s_plus_l);
            assert!(!verify(public_key, message, &unreduced, &Options::default()));
            assert!(!verify(public_key, message, &unreduced, &ZIP215));
            assert!(!key.verify_strict(message, &Signature::from(unreduced)));
        }
    }

    //
    // The remaining items in this mod are for the repudiation tests
    //

    // Taken from curve25519_core::constants::EIGHT_TORSION[4]
    const EIGHT_TORSION_4: [u8; 32] = [
        236, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
        255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 127,
    ];

    const WEAK_PUBKEY: CompressedEdwardsY = CompressedEdwardsY(EIGHT_TORSION_4);

    fn compute_challenge(message: &[u8], pub_key: &EdwardsPoint, signature_r: &EdwardsPoint) -> Scalar {
        let h = Sha512::new()
            .chain_update(signature_r.compress().as_bytes())
            .chain_update(pub_key.compress().as_bytes())
            .chain_update(message);
        Scalar::from_hash(h)
    }

    fn serialize_signature(r: &EdwardsPoint, s: &Scalar) -> Vec<u8> {
        [&r.compress().as_bytes()[..], &s.as_bytes()[..]].concat()
    }

    // Pick a random Scalar
    fn non_null_scalar() -> Scalar {
        let mut rng = rand::rngs::OsRng;
        let mut s_candidate = Scalar::random(&mut rng);
        while s_candidate == Scalar::ZERO {
            s_candidate = Scalar::random(&mut rng);
        }
        s_candidate
    }

    fn pick_r(s: Scalar) -> EdwardsPoint {
        let r0 = s * ED25519_BASEPOINT_POINT;
        // Pick a torsion point of order 2
        r0 + WEAK_PUBKEY.decompress().unwrap().neg()
    }

    // A small-order key admits a signature which is valid for two distinct
    // messages.  ZIP215 accepts it; the default and strict policies refuse
    // the key.
    #[test]
    fn repudiation() {
        let message1 = b"Send 100 USD to Alice";
        let message2 = b"Send 100000 USD to Alice";

        let mut s: Scalar = non_null_scalar();
        let pubkey = WEAK_PUBKEY.decompress().unwrap();
        let mut r = pick_r(s);

        // Find an R such that
        //     H(R || A || M₁) · A == A == H(R || A || M₂) · A
        // This happens with high probability when A is low order.
        while !(pubkey.neg() + compute_challenge(message1, &pubkey, &r) * pubkey).is_identity()
            || !(pubkey.neg() + compute_challenge(message2, &pubkey, &r) * pubkey).is_identity()
        {
            // We pick an s and let R = sB - A where B is the basepoint
            s = non_null_scalar();
            r = pick_r(s);
        }

        let signature = serialize_signature(&r, &s);
        let vk = VerifyingKey::from_bytes(pubkey.compress().as_bytes()).unwrap();
        let sig = Signature::try_from(&signature[..]).unwrap();

        assert!(vk.is_weak());

        assert!(vk.verify_with_options(message1, &sig, &ZIP215));
        assert!(vk.verify_with_options(message2, &sig, &ZIP215));

        assert!(!vk.verify(message1, &sig));
        assert!(!vk.verify(message2, &sig));
        assert!(!vk.verify_strict(message1, &sig));
        assert!(!vk.verify_strict(message2, &sig));
    }
}

mod integrations {
    use super::*;

    use rand::rngs::OsRng;
    use rand::Rng;

    struct TestKey {
        secret: Scalar,
        public: VerifyingKey,
    }

    impl TestKey {
        fn generate() -> TestKey {
            let secret = Scalar::random(&mut OsRng);
            let public =
                VerifyingKey::from_bytes(EdwardsPoint::mul_base(&secret).compress().as_bytes())
                    .unwrap();
            TestKey { secret, public }
        }

        /// R = [r]B, S = r + H(R || A || M) a.
        #[allow(non_snake_case)]
        fn sign(&self, message: &[u8]) -> Signature {
            let r = Scalar::random(&mut OsRng);
            let R = EdwardsPoint::mul_base(&r).compress();
            let h = Scalar::from_hash(
                Sha512::new()
                    .chain_update(R.as_bytes())
                    .chain_update(self.public.as_bytes())
                    .chain_update(message),
            );
            let s = r + h * self.secret;

            let mut bytes = [0u8; SIGNATURE_LENGTH];
            bytes[..32].copy_from_slice(R.as_bytes());
            bytes[32..].copy_from_slice(s.as_bytes());
            Signature::from_bytes(&bytes)
        }
    }

    #[test]
    fn sign_verify() {
        let good: &[u8] = "test message".as_bytes();
        let bad: &[u8] = "wrong message".as_bytes();

        let key = TestKey::generate();
        let sig = key.sign(good);

        for policy in [Policy::DEFAULT, Policy::ZIP215, Policy::STRICT] {
            assert!(
                key.public.verify_with_policy(good, &sig, &policy),
                "Verification of a valid signature failed under {:?}",
                policy
            );
            assert!(
                !key.public.verify_with_policy(bad, &sig, &policy),
                "Verification of a signature on a different message passed under {:?}",
                policy
            );
        }

        let other = TestKey::generate();
        assert!(!other.public.verify(good, &sig));
    }

    #[cfg(feature = "batch")]
    #[test]
    fn verify_batch_seven_signatures() {
        let messages: [&[u8]; 7] = [
            b"Watch closely everyone, I'm going to show you how to kill a god.",
            b"I'm not a cryptographer I just encrypt a lot.",
            b"Still not a cryptographer.",
            b"This is a test of the tsunami alert system. This is only a test.",
            b"Fuck dumbin' it down, spit ice, skip jewellery: Molotov cocktails on me like accessories.",
            b"Hey, I never cared about your bucks, so if I run up with a mask on, probably got a gas can too.",
            b"And I'm not here to fill 'er up. Nope, we came to riot, here to incite, we don't want any of your stuff.",
        ];
        let keys: Vec<TestKey> = (0..messages.len()).map(|_| TestKey::generate()).collect();
        let signatures: Vec<[u8; SIGNATURE_LENGTH]> = keys
            .iter()
            .zip(messages.iter())
            .map(|(key, msg)| key.sign(msg).to_bytes())
            .collect();
        let public_keys: Vec<[u8; PUBLIC_KEY_LENGTH]> =
            keys.iter().map(|key| key.public.to_bytes()).collect();

        let pks: Vec<&[u8]> = public_keys.iter().map(|pk| &pk[..]).collect();
        let sigs: Vec<&[u8]> = signatures.iter().map(|sig| &sig[..]).collect();

        for options in [Options::default(), ZIP215] {
            let (ok, valid) = verify_batch(&mut OsRng, &pks, &messages, &sigs, &options).unwrap();
            assert!(ok);
            assert_eq!(valid, vec![true; messages.len()]);
        }
    }

    // A batch of mixed valid, tampered, unreduced and malformed entries
    // agrees with single verification entry by entry.
    #[cfg(feature = "batch")]
    #[test]
    fn batch_agrees_with_single_verification() {
        let mut rng = OsRng;
        let message = b"batch equivalence";

        let mut public_keys: Vec<Vec<u8>> = Vec::new();
        let mut signatures: Vec<Vec<u8>> = Vec::new();
        for i in 0..16 {
            let key = TestKey::generate();
            let mut sig = key.sign(message).to_bytes();
            match i % 5 {
                1 => sig[rng.gen_range(0..64usize)] ^= 1u8 << rng.gen_range(0..8u32),
                2 => {
                    let s_plus_l = add_order(&sig[32..].try_into().unwrap());
                    sig[32..].copy_from_slice(&s_plus_l);
                }
                _ => {}
            }
            let mut pk = key.public.to_bytes().to_vec();
            if i == 7 {
                pk.pop();
            }
            public_keys.push(pk);
            signatures.push(sig.to_vec());
        }

        let pks: Vec<&[u8]> = public_keys.iter().map(|pk| &pk[..]).collect();
        let sigs: Vec<&[u8]> = signatures.iter().map(|sig| &sig[..]).collect();
        let msgs: Vec<&[u8]> = vec![&message[..]; pks.len()];

        for policy in [Policy::DEFAULT, Policy::ZIP215, Policy::STRICT] {
            let (ok, valid) =
                verify_batch_with_policy(&mut rng, &pks, &msgs, &sigs, &policy).unwrap();
            let expected: Vec<bool> = (0..pks.len())
                .map(|i| {
                    VerifyingKey::try_from(pks[i])
                        .ok()
                        .zip(Signature::from_slice(sigs[i]).ok())
                        .is_some_and(|(key, sig)| key.verify_with_policy(msgs[i], &sig, &policy))
                })
                .collect();
            assert_eq!(valid, expected);
            assert_eq!(ok, expected.iter().all(|v| *v));
            assert!(!ok);
        }
    }

    #[cfg(feature = "batch")]
    #[test]
    fn batch_with_one_tampered_signature() {
        let message = b"one bad apple";
        let keys: Vec<TestKey> = (0..8).map(|_| TestKey::generate()).collect();
        let mut signatures: Vec<[u8; SIGNATURE_LENGTH]> =
            keys.iter().map(|key| key.sign(message).to_bytes()).collect();
        signatures[5][0] ^= 0x20;

        let public_keys: Vec<[u8; PUBLIC_KEY_LENGTH]> =
            keys.iter().map(|key| key.public.to_bytes()).collect();
        let pks: Vec<&[u8]> = public_keys.iter().map(|pk| &pk[..]).collect();
        let sigs: Vec<&[u8]> = signatures.iter().map(|sig| &sig[..]).collect();
        let msgs: Vec<&[u8]> = vec![&message[..]; 8];

        let (ok, valid) = verify_batch(&mut OsRng, &pks, &msgs, &sigs, &ZIP215).unwrap();
        assert!(!ok);
        let mut expected = vec![true; 8];
        expected[5] = false;
        assert_eq!(valid, expected);
    }

    #[test]
    fn public_key_from_secret_and_public_key() {
        let key = TestKey::generate();
        let reparsed = VerifyingKey::try_from(key.public.as_ref()).unwrap();
        assert_eq!(key.public, reparsed);
        assert_eq!(key.public.as_bytes(), reparsed.as_bytes());
    }
}

#[cfg(feature = "serde")]
mod serialisation {
    use super::*;

    static PUBLIC_KEY_BYTES: [u8; PUBLIC_KEY_LENGTH] =
        hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

    static SIGNATURE_BYTES: [u8; SIGNATURE_LENGTH] = hex!(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
        "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
    );

    #[test]
    fn serialize_deserialize_signature_json() {
        let signature = Signature::from_bytes(&SIGNATURE_BYTES);
        let encoded = serde_json::to_string(&signature).unwrap();
        let decoded: Signature = serde_json::from_str(&encoded).unwrap();
        assert_eq!(signature, decoded);
    }

    #[test]
    fn serialize_deserialize_verifying_key_json() {
        let public_key = VerifyingKey::from_bytes(&PUBLIC_KEY_BYTES).unwrap();
        let encoded = serde_json::to_string(&public_key).unwrap();
        let decoded: VerifyingKey = serde_json::from_str(&encoded).unwrap();
        assert_eq!(public_key, decoded);
    }

    #[test]
    fn serialize_deserialize_options_json() {
        let decoded: Options = serde_json::from_str(r#"{"zip215_verify":true}"#).unwrap();
        assert_eq!(decoded.policy(), Policy::ZIP215);

        let encoded = serde_json::to_string(&Policy::STRICT).unwrap();
        let decoded: Policy = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Policy::STRICT);
    }

    #[test]
    fn deserialize_verifying_key_too_long() {
        let mut bytes = PUBLIC_KEY_BYTES.to_vec();
        bytes.push(0);
        let encoded = serde_json::to_string(&bytes).unwrap();
        assert!(serde_json::from_str::<VerifyingKey>(&encoded).is_err());
    }
}
