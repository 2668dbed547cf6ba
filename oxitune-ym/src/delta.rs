//! Frame-delta encoding.
//!
//! An alternative representation for size comparison: each frame after the
//! first is a 14-bit change mask (register `r` at bit `14 - r`, two bytes
//! big-endian) followed by the new values of the changed registers in
//! register order. Frame 0 is not represented, and there is no decoder.

use crate::ym3::{YM_REGISTERS, Ym3File};

/// Encode an image as per-frame change masks and changed values.
pub fn delta_encode(ym: &Ym3File) -> Vec<u8> {
    let mut output = Vec::new();
    for i in 1..ym.frames() {
        let mut mask: u16 = 0;
        for r in 0..YM_REGISTERS {
            if ym.register(r)[i] != ym.register(r)[i - 1] {
                mask |= 1;
            }
            mask <<= 1;
        }
        output.extend_from_slice(&mask.to_be_bytes());
        for r in 0..YM_REGISTERS {
            if ym.register(r)[i] != ym.register(r)[i - 1] {
                output.push(ym.register(r)[i]);
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_fixture() {
        // 3 frames; frame 1 changes registers 0 and 13, frame 2 changes nothing
        let mut registers: Vec<Vec<u8>> = (0..YM_REGISTERS).map(|r| vec![r as u8; 3]).collect();
        registers[0][1] = 0x55;
        registers[0][2] = 0x55;
        registers[13][1] = 0x66;
        registers[13][2] = 0x66;
        let ym = Ym3File::from_registers(&registers).unwrap();

        let delta = delta_encode(&ym);
        // Register 0 sits at bit 14, register 13 at bit 1
        assert_eq!(delta, vec![0x40, 0x02, 0x55, 0x66, 0x00, 0x00]);
    }

    #[test]
    fn test_constant_image() {
        let registers: Vec<Vec<u8>> = (0..YM_REGISTERS).map(|r| vec![r as u8; 5]).collect();
        let ym = Ym3File::from_registers(&registers).unwrap();
        // 4 delta frames, each an empty two-byte mask
        assert_eq!(delta_encode(&ym), vec![0; 8]);
    }

    #[test]
    fn test_single_frame() {
        let registers: Vec<Vec<u8>> = (0..YM_REGISTERS).map(|_| vec![0u8; 1]).collect();
        let ym = Ym3File::from_registers(&registers).unwrap();
        assert!(delta_encode(&ym).is_empty());
    }

    #[test]
    fn test_every_register_changed() {
        let mut registers: Vec<Vec<u8>> = (0..YM_REGISTERS).map(|r| vec![r as u8; 2]).collect();
        for (r, stream) in registers.iter_mut().enumerate() {
            stream[1] = 0x80 + r as u8;
        }
        let ym = Ym3File::from_registers(&registers).unwrap();

        let delta = delta_encode(&ym);
        // All fourteen bits set: bits 14 down to 1
        assert_eq!(&delta[0..2], &[0x7F, 0xFE]);
        assert_eq!(delta.len(), 2 + YM_REGISTERS);
        assert_eq!(delta[2], 0x80);
        assert_eq!(delta[15], 0x8D);
    }
}
