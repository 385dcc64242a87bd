use base64::{Engine, engine::general_purpose::STANDARD};
use mixder::encoder::Encoder;
use mixder_asn1::{encode_bit_string_bytes, encode_integer, encode_oid};
use mixder_ballot::{Error, PublicKey, SCHEME_OID_ARCS, unpack_public_key};
use mixder_der::{encode_sequence, encode_tlv};
use mixder_pem::Pem;
use num_bigint::BigInt;

// 1536-bit modulus with the top bit set
const P_HEX: &str = "ffffffffffffffffc90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74020bbea63b139b22514a08798e3404ddef9519b3cd3a431b302b0a6df25f14374fe1356d6d51c245e485b576625e7ec6f44c42e9a637ed6b0bff5cb6f406b7edee386bfb5a899fa5ae9f24117c4b1fe649286651ece45b3dc2007cb8a163bf0598da48361c55d39a69163fa8fd24cf5f83655d23dca3ad961c62f356208552bb9ed529077096966d670c354e4abc9804f1746c08ca237327ffffffffffffffff";

fn election_key_der(election: &str) -> Vec<u8> {
    let p = BigInt::parse_bytes(P_HEX.as_bytes(), 16).unwrap();
    let parameters = encode_sequence(
        &[
            encode_integer(&p),
            encode_integer(&BigInt::from(2)),
            encode_tlv(0x1b, election.as_bytes()),
        ]
        .concat(),
    );
    let algorithm = encode_sequence(&[encode_oid(&SCHEME_OID_ARCS).unwrap(), parameters].concat());
    let y = encode_bit_string_bytes(&encode_integer(&BigInt::from(0x1234_5678)));
    encode_sequence(&[algorithm, y].concat())
}

fn to_pem(der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut text = String::from("-----BEGIN PUBLIC KEY-----\n");
    for line in body.as_bytes().chunks(64) {
        text.push_str(std::str::from_utf8(line).unwrap());
        text.push('\n');
    }
    text.push_str("-----END PUBLIC KEY-----\n");
    text
}

#[test]
fn unpack_election_public_key() {
    let der = election_key_der("RK2024 (test)");
    let key = unpack_public_key(&to_pem(&der)).unwrap();

    // the high bit of p is set so its content carries a leading zero octet
    assert_eq!(format!("00{}", P_HEX), key.modulus_hex());
    assert_eq!("02", key.generator_hex());
    assert_eq!("RK2024__test_", key.election_id());
    assert_eq!(b"RK2024 (test)", key.raw_election_id());
    assert_eq!(*key.algorithm(), "1.3.6.1.4.1.3029.2.1");
}

#[test]
fn public_key_pem_roundtrip() {
    let der = election_key_der("VOTE");
    let key = unpack_public_key(&to_pem(&der)).unwrap();

    let pem: Pem = key.encode().unwrap();
    let text = pem.to_string();
    assert_eq!(to_pem(&der).trim_end(), text);

    let again: PublicKey = text.parse().unwrap();
    assert_eq!(key, again);
}

#[test]
fn unpack_public_key_envelope_errors() {
    let der = election_key_der("VOTE");
    let text = to_pem(&der);
    let without_footer = text.replace("-----END PUBLIC KEY-----\n", "");

    assert!(matches!(
        unpack_public_key(&without_footer),
        Err(Error::InvalidPem(_))
    ));
    assert!(matches!(
        unpack_public_key("not a key"),
        Err(Error::InvalidPem(_))
    ));
}

#[test]
fn unpack_public_key_truncated_der() {
    let der = election_key_der("VOTE");
    let text = to_pem(&der[..der.len() - 1]);
    assert!(matches!(
        unpack_public_key(&text),
        Err(Error::InvalidDer(_))
    ));
}
