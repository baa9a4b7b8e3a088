//! One-line script disassembly
//!
//! Renders a script as a space-separated opcode/data listing for the
//! `asm` fields of the response DTOs. Data pushes render as bare hex,
//! small integers as their numeric value. A script that fails to parse
//! renders everything parsed so far followed by an `[error]` marker, so
//! disassembly never fails the surrounding decode.

use bitcoin::opcodes::Opcode;
use bitcoin::script::{Instruction, Script};

const OP_1NEGATE: u8 = 0x4f;
const OP_PUSHNUM_START: u8 = 0x51;
const OP_PUSHNUM_END: u8 = 0x60;

/// Disassemble a script into a one-line human-readable string
pub fn disassemble(script: &Script) -> String {
    let mut parts: Vec<String> = Vec::new();

    for instruction in script.instructions() {
        match instruction {
            Ok(Instruction::PushBytes(push)) => {
                if push.is_empty() {
                    parts.push("0".to_string());
                } else {
                    parts.push(hex::encode(push.as_bytes()));
                }
            }
            Ok(Instruction::Op(op)) => parts.push(format_opcode(op)),
            Err(_) => {
                // Truncated push or bad length prefix. Keep what parsed.
                parts.push("[error]".to_string());
                break;
            }
        }
    }

    parts.join(" ")
}

fn format_opcode(op: Opcode) -> String {
    let value = op.to_u8();
    match value {
        OP_1NEGATE => "-1".to_string(),
        OP_PUSHNUM_START..=OP_PUSHNUM_END => (value - OP_PUSHNUM_START + 1).to_string(),
        _ => format!("{:?}", op),
    }
}
