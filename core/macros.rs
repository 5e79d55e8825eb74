// !!!! CAUTION !!!!
// !---------------!
// !  DANGER ZONE  !
// !---------------!
// ! HIGH RISK  OF !
// ! BRAIN DAMAGE  !
// !---------------!
// !   KEEP OUT    !
// !!!!!!!!!!!!!!!!!

/// Defines opcode identity constants and their mnemonics.
///
/// Expects `pub struct Opcode(u16)` deriving `PartialEq` and `Eq` in the calling module.
#[macro_export]
macro_rules! define_opcodes {
    ($($name:ident = $mnemonic:literal),* $(,)?) => (
        #[repr(u16)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        enum Opcodes {
            $($name),*
        }

        $(pub const $name: Opcode = Opcode(Opcodes::$name as u16);)*

        pub(crate) fn defined_mnemonic(opcode: Opcode) -> Option<&'static str> {
            Some(match opcode {
                $($name => $mnemonic,)*
                _ => return None,
            })
        }
    );
}
pub use define_opcodes;
