//! Script template classification and address extraction
//!
//! Mirrors the standard script classes Bitcoin Core reports for a
//! `scriptPubKey`, delegating template detection and address encoding to
//! the `bitcoin` crate. The bare multisig template has no predicate in
//! the library, so it is matched here instruction by instruction.

use bitcoin::opcodes::all::OP_CHECKMULTISIG;
use bitcoin::script::{Instruction, Script};
use bitcoin::{Address, Network, PublicKey};

const OP_PUSHNUM_START: u8 = 0x51;
const OP_PUSHNUM_END: u8 = 0x60;

/// Standard script classes, named as Bitcoin Core reports them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptClass {
    /// Pay-to-PubKey (legacy)
    PubKey,
    /// Pay-to-PubKey-Hash
    PubKeyHash,
    /// Pay-to-Script-Hash
    ScriptHash,
    /// Bare M-of-N multisig
    MultiSig,
    /// OP_RETURN data carrier
    NullData,
    /// Pay-to-Witness-PubKey-Hash (SegWit v0)
    WitnessV0KeyHash,
    /// Pay-to-Witness-Script-Hash (SegWit v0)
    WitnessV0ScriptHash,
    /// Pay-to-Taproot (SegWit v1)
    WitnessV1Taproot,
    /// Witness program with an unrecognised version or length
    WitnessUnknown,
    /// Anything that matches no standard template
    NonStandard,
}

impl ScriptClass {
    /// The class string carried in the `type` field of the JSON result
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptClass::PubKey => "pubkey",
            ScriptClass::PubKeyHash => "pubkeyhash",
            ScriptClass::ScriptHash => "scripthash",
            ScriptClass::MultiSig => "multisig",
            ScriptClass::NullData => "nulldata",
            ScriptClass::WitnessV0KeyHash => "witness_v0_keyhash",
            ScriptClass::WitnessV0ScriptHash => "witness_v0_scripthash",
            ScriptClass::WitnessV1Taproot => "witness_v1_taproot",
            ScriptClass::WitnessUnknown => "witness_unknown",
            ScriptClass::NonStandard => "nonstandard",
        }
    }
}

impl std::fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed bare multisig template
#[derive(Debug, Clone, PartialEq)]
pub struct MultisigTemplate {
    /// Raw public keys in script order
    pub pubkeys: Vec<Vec<u8>>,
    /// Number of required signatures (M in M-of-N)
    pub required_sigs: u32,
    /// Total number of public keys (N in M-of-N)
    pub total_pubkeys: u32,
}

/// Classify a locking script into its standard template class
pub fn classify(script: &Script) -> ScriptClass {
    if script.is_p2pkh() {
        ScriptClass::PubKeyHash
    } else if script.is_p2sh() {
        ScriptClass::ScriptHash
    } else if script.is_p2wpkh() {
        ScriptClass::WitnessV0KeyHash
    } else if script.is_p2wsh() {
        ScriptClass::WitnessV0ScriptHash
    } else if script.is_p2tr() {
        ScriptClass::WitnessV1Taproot
    } else if script.is_p2pk() {
        ScriptClass::PubKey
    } else if script.is_op_return() {
        ScriptClass::NullData
    } else if parse_multisig(script).is_some() {
        ScriptClass::MultiSig
    } else if script.is_witness_program() {
        ScriptClass::WitnessUnknown
    } else {
        ScriptClass::NonStandard
    }
}

/// Parse a bare multisig script
///
/// Template: `OP_M <pubkey>... OP_N OP_CHECKMULTISIG` where every pushed
/// element is a plausible public key (33 bytes with an 02/03 prefix, or
/// 65 bytes with an 04 prefix) and N matches the push count.
pub fn parse_multisig(script: &Script) -> Option<MultisigTemplate> {
    let instructions: Vec<Instruction> = script.instructions().collect::<Result<_, _>>().ok()?;
    if instructions.len() < 4 {
        return None;
    }

    let required_sigs = small_int(&instructions[0])?;
    let total_pubkeys = small_int(&instructions[instructions.len() - 2])?;
    match instructions.last() {
        Some(Instruction::Op(op)) if *op == OP_CHECKMULTISIG => {}
        _ => return None,
    }

    let key_pushes = &instructions[1..instructions.len() - 2];
    if key_pushes.len() != total_pubkeys as usize || required_sigs > total_pubkeys {
        return None;
    }

    let mut pubkeys = Vec::with_capacity(key_pushes.len());
    for instruction in key_pushes {
        let data = match instruction {
            Instruction::PushBytes(push) => push.as_bytes(),
            Instruction::Op(_) => return None,
        };
        let plausible_key = matches!(
            (data.len(), data.first().copied()),
            (33, Some(0x02 | 0x03)) | (65, Some(0x04))
        );
        if !plausible_key {
            return None;
        }
        pubkeys.push(data.to_vec());
    }

    Some(MultisigTemplate {
        pubkeys,
        required_sigs: required_sigs as u32,
        total_pubkeys: total_pubkeys as u32,
    })
}

/// Extract the encoded addresses and required-signature count for a
/// classified locking script
///
/// Address encoding failures are not errors: a script whose embedded key
/// does not parse simply yields no address, matching the tolerant
/// behaviour of the original result format.
pub fn extract_addresses(
    script: &Script,
    class: &ScriptClass,
    network: Network,
) -> (Vec<String>, Option<u32>) {
    match class {
        ScriptClass::PubKey => {
            let addresses = p2pk_pubkey_bytes(script)
                .and_then(|bytes| PublicKey::from_slice(bytes).ok())
                .map(|pk| vec![Address::p2pkh(&pk, network).to_string()])
                .unwrap_or_default();
            (addresses, Some(1))
        }
        ScriptClass::PubKeyHash
        | ScriptClass::ScriptHash
        | ScriptClass::WitnessV0KeyHash
        | ScriptClass::WitnessV0ScriptHash
        | ScriptClass::WitnessV1Taproot => (address_from_script(script, network), Some(1)),
        ScriptClass::MultiSig => match parse_multisig(script) {
            Some(template) => {
                let addresses = template
                    .pubkeys
                    .iter()
                    .filter_map(|bytes| PublicKey::from_slice(bytes).ok())
                    .map(|pk| Address::p2pkh(&pk, network).to_string())
                    .collect();
                (addresses, Some(template.required_sigs))
            }
            None => (Vec::new(), None),
        },
        ScriptClass::WitnessUnknown => (address_from_script(script, network), None),
        ScriptClass::NullData | ScriptClass::NonStandard => (Vec::new(), None),
    }
}

fn address_from_script(script: &Script, network: Network) -> Vec<String> {
    Address::from_script(script, network)
        .map(|address| vec![address.to_string()])
        .unwrap_or_default()
}

fn p2pk_pubkey_bytes(script: &Script) -> Option<&[u8]> {
    match script.instructions().next()?.ok()? {
        Instruction::PushBytes(push) => Some(push.as_bytes()),
        Instruction::Op(_) => None,
    }
}

fn small_int(instruction: &Instruction) -> Option<u8> {
    match instruction {
        Instruction::Op(op) => {
            let value = op.to_u8();
            if (OP_PUSHNUM_START..=OP_PUSHNUM_END).contains(&value) {
                Some(value - OP_PUSHNUM_START + 1)
            } else {
                None
            }
        }
        Instruction::PushBytes(_) => None,
    }
}
