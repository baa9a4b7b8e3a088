//! End-to-end decoding of real mainnet transactions

use std::collections::HashSet;

use bitcoin::Network;
use rawtx_decode::decoder::{decode_hex, decode_raw_bytes, decode_transaction_with_filter};
use rawtx_decode::types::DecodedTransaction;

use crate::common::{
    GENESIS_ADDRESS, GENESIS_COINBASE_HEX, GENESIS_COINBASE_TXID, P2PK_PREV_TXID, P2PK_TXID,
    P2PK_TX_HEX, SEGWIT_PREV_TXID, SEGWIT_TXID, SEGWIT_TX_HEX,
};

#[test]
fn test_decode_genesis_coinbase() {
    let decoded = decode_hex(GENESIS_COINBASE_HEX, Network::Bitcoin).unwrap();

    assert_eq!(decoded.txid, GENESIS_COINBASE_TXID);
    assert_eq!(decoded.version, 1);
    assert_eq!(decoded.locktime, 0);
    assert_eq!(decoded.size, GENESIS_COINBASE_HEX.len() / 2);
    assert_eq!(decoded.size_stripped, decoded.size);

    // Coinbase transactions only have a single input by definition
    assert_eq!(decoded.vin.len(), 1);
    let vin = &decoded.vin[0];
    assert!(vin.is_coinbase());
    assert_eq!(vin.sequence, 0xffffffff);
    assert!(vin.txid.is_none());
    assert!(vin.vout.is_none());
    assert!(vin.script_sig.is_none());
    assert!(vin.witness.is_none());
    // The famous Times headline is embedded in the coinbase data
    let coinbase = vin.coinbase.as_ref().unwrap();
    assert!(coinbase.contains(hex::encode("The Times 03/Jan/2009").as_str()));

    assert_eq!(decoded.vout.len(), 1);
    assert!((decoded.vout[0].value - 50.0).abs() < f64::EPSILON);
    assert_eq!(decoded.vout[0].n, 0);
    let spk = &decoded.vout[0].script_pub_key;
    assert_eq!(spk.script_type, "pubkey");
    assert_eq!(spk.req_sigs, Some(1));
    assert_eq!(spk.addresses, vec![GENESIS_ADDRESS.to_string()]);
    assert!(spk.asm.starts_with("04678afd"));
    assert!(spk.asm.ends_with("OP_CHECKSIG"));
    assert_eq!(spk.hex, format!("41{}ac", &spk.asm[..130]));
}

#[test]
fn test_decode_first_p2pk_payment() {
    let decoded = decode_hex(P2PK_TX_HEX, Network::Bitcoin).unwrap();

    assert_eq!(decoded.txid, P2PK_TXID);
    assert_eq!(decoded.version, 1);
    assert_eq!(decoded.locktime, 0);
    assert_eq!(decoded.size, P2PK_TX_HEX.len() / 2);
    assert_eq!(decoded.size_stripped, decoded.size);

    assert_eq!(decoded.vin.len(), 1);
    let vin = &decoded.vin[0];
    assert!(!vin.is_coinbase());
    assert_eq!(vin.txid.as_deref(), Some(P2PK_PREV_TXID));
    assert_eq!(vin.vout, Some(0));
    assert_eq!(vin.sequence, 0xffffffff);
    assert!(vin.witness.is_none());

    let script_sig = vin.script_sig.as_ref().unwrap();
    // One DER signature push, no parse errors
    assert!(script_sig.asm.starts_with("304402"));
    assert!(!script_sig.asm.contains("[error]"));
    assert!(script_sig.hex.starts_with("4730"));

    // 10 BTC to Hal, 40 BTC in change, both pay-to-pubkey
    assert_eq!(decoded.vout.len(), 2);
    assert!((decoded.vout[0].value - 10.0).abs() < f64::EPSILON);
    assert!((decoded.vout[1].value - 40.0).abs() < f64::EPSILON);
    for vout in &decoded.vout {
        assert_eq!(vout.script_pub_key.script_type, "pubkey");
        assert_eq!(vout.script_pub_key.req_sigs, Some(1));
        assert_eq!(vout.script_pub_key.addresses.len(), 1);
    }
    assert_ne!(
        decoded.vout[0].script_pub_key.addresses,
        decoded.vout[1].script_pub_key.addresses
    );
}

#[test]
fn test_decode_segwit_multisig_spend() {
    let decoded = decode_hex(SEGWIT_TX_HEX, Network::Bitcoin).unwrap();

    // Txid is the witness-stripped hash
    assert_eq!(decoded.txid, SEGWIT_TXID);
    assert_eq!(decoded.size, SEGWIT_TX_HEX.len() / 2);
    assert!(decoded.size_stripped < decoded.size);

    assert_eq!(decoded.vin.len(), 1);
    let vin = &decoded.vin[0];
    assert_eq!(vin.txid.as_deref(), Some(SEGWIT_PREV_TXID));
    assert_eq!(vin.vout, Some(1));
    assert_eq!(vin.sequence, 0xfffffffd);

    // p2sh-p2wsh: the signature script is a single push of the witness program
    let script_sig = vin.script_sig.as_ref().unwrap();
    assert_eq!(
        script_sig.asm,
        "002090a0daaae7ab4d2fe9737db9ea7f9b5a63dfa083cc457adf1e324167d78f1ded"
    );

    // Witness stack: empty dummy element, two signatures, 2-of-4 witness script
    let witness = vin.witness.as_ref().unwrap();
    assert_eq!(witness.len(), 4);
    assert_eq!(witness[0], "");
    assert!(witness[1].starts_with("30"));
    assert!(witness[2].starts_with("30"));
    assert!(witness[3].starts_with("52")); // OP_2
    assert!(witness[3].ends_with("ae")); // OP_CHECKMULTISIG

    assert_eq!(decoded.vout.len(), 2);
    assert!((decoded.vout[0].value - 0.01194).abs() < 1e-10);
    for vout in &decoded.vout {
        let spk = &vout.script_pub_key;
        assert_eq!(spk.script_type, "scripthash");
        assert_eq!(spk.req_sigs, Some(1));
        assert_eq!(spk.addresses.len(), 1);
        assert!(spk.addresses[0].starts_with('3'));
        assert!(spk.asm.starts_with("OP_HASH160"));
        assert!(spk.asm.ends_with("OP_EQUAL"));
    }
}

#[test]
fn test_decode_raw_bytes_matches_hex_path() {
    let raw = hex::decode(P2PK_TX_HEX).unwrap();
    let from_bytes = decode_raw_bytes(&raw, Network::Bitcoin).unwrap();
    let from_hex = decode_hex(P2PK_TX_HEX, Network::Bitcoin).unwrap();
    assert_eq!(from_bytes, from_hex);
}

#[test]
fn test_decode_with_address_filter() {
    let raw = hex::decode(P2PK_TX_HEX).unwrap();
    let tx: bitcoin::Transaction = bitcoin::consensus::deserialize(&raw).unwrap();

    let unfiltered = decode_transaction_with_filter(&tx, Network::Bitcoin, None);
    let hal_address = unfiltered.vout[0].script_pub_key.addresses[0].clone();

    let filter: HashSet<String> = [hal_address].into();
    let filtered = decode_transaction_with_filter(&tx, Network::Bitcoin, Some(&filter));

    assert_eq!(filtered.vout.len(), 1);
    assert_eq!(filtered.vout[0].n, 0);
    // Inputs and identity are untouched by the filter
    assert_eq!(filtered.txid, unfiltered.txid);
    assert_eq!(filtered.vin, unfiltered.vin);
}

#[test]
fn test_json_shape_of_coinbase_result() {
    let decoded = decode_hex(GENESIS_COINBASE_HEX, Network::Bitcoin).unwrap();
    let json: serde_json::Value = serde_json::to_value(&decoded).unwrap();

    // Top-level field names follow the original result structure
    for key in ["txid", "version", "locktime", "sizestripped", "size", "vin", "vout"] {
        assert!(json.get(key).is_some(), "missing top-level key {}", key);
    }

    // Coinbase vin omits the outpoint fields entirely
    let vin = &json["vin"][0];
    assert!(vin.get("coinbase").is_some());
    assert!(vin.get("txid").is_none());
    assert!(vin.get("vout").is_none());
    assert!(vin.get("scriptSig").is_none());
    assert!(vin.get("txinwitness").is_none());

    let spk = &json["vout"][0]["scriptPubKey"];
    assert_eq!(spk["type"], "pubkey");
    assert_eq!(spk["reqSigs"], 1);
    assert_eq!(spk["addresses"][0], GENESIS_ADDRESS);
}

#[test]
fn test_json_round_trip() {
    let decoded = decode_hex(SEGWIT_TX_HEX, Network::Bitcoin).unwrap();
    let json = serde_json::to_string(&decoded).unwrap();
    let back: DecodedTransaction = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, back);
}

#[test]
fn test_network_changes_address_encoding_only() {
    let mainnet = decode_hex(GENESIS_COINBASE_HEX, Network::Bitcoin).unwrap();
    let testnet = decode_hex(GENESIS_COINBASE_HEX, Network::Testnet).unwrap();

    assert_eq!(mainnet.txid, testnet.txid);
    assert_eq!(
        mainnet.vout[0].script_pub_key.script_type,
        testnet.vout[0].script_pub_key.script_type
    );
    assert_ne!(
        mainnet.vout[0].script_pub_key.addresses,
        testnet.vout[0].script_pub_key.addresses
    );
}
