/// # Opcodes
///
/// Chip-8 opcodes are 16 bits wide and read as four nibbles. Which nibbles pick the
/// operation depends on the family:
/// - `(n, _, _, _)` the family; every opcode has one
/// - `(_, _, _, n)` the variant within `0x8` and `0x9`
/// - `(_, _, n, n)` the variant within `0xE` and `0xF`
/// - `(n, n, n, n)` fixed opcodes that carry no operands (CLS, RET)
///
/// The remaining nibbles are operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an 8-bit immediate
/// - `(_, n, _, _)` register Vx
/// - `(_, _, n, _)` register Vy
/// - `(_, _, _, n)` a sprite height
pub trait Opcode {
    /// The four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// Index of register Vx.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// Index of register Vy.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_nnn]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            (self >> 12) as u8,
            ((self >> 8) & 0xF) as u8,
            ((self >> 4) & 0xF) as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        assert_eq!(0xD5E3_u16.nibbles(), (0xD, 0x5, 0xE, 0x3));
        assert_eq!(0x00EE_u16.nibbles(), (0x0, 0x0, 0xE, 0xE));
    }

    #[test]
    fn test_register_operands() {
        let op: u16 = 0x8AB0;
        assert_eq!(op.x(), 0xA);
        assert_eq!(op.y(), 0xB);
    }

    #[test]
    fn test_immediate_operands() {
        let op: u16 = 0xD12F;
        assert_eq!(op.n(), 0xF);
        assert_eq!(op.kk(), 0x2F);
        assert_eq!(op.addr(), 0x12F);
    }
}
