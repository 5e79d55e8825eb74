//! Decode driver: prefix scanning, opcode dispatch and the lock legality pass.

use core::ops::{Deref, DerefMut};

use xdis_core::{
    bytes::{ByteCache, ReadBytes, MAX_INSN_LEN},
    error::ErrorKind,
};

use crate::{
    insn::{prefix, rex, seg, CpuMode, Instruction, ModRm, Vex},
    opcode::{opcode, optype, Descriptor, FixedReg, Opcode, Param, Parse},
    operand::Operand,
    tables::{self, INVALID_DESC},
    Options,
};

pub(crate) struct Inner<'a, R: ?Sized> {
    pub(crate) opts: &'a Options,
    pub(crate) reader: &'a mut R,
    pub(crate) cache: ByteCache,
    /// Instruction classes that get a full decode.
    pub(crate) filter: u32,
    /// Operand values are materialized for the current descriptor.
    pub(crate) full: bool,
    /// Displacement of the ModRM or SIB addressing form.
    pub(crate) disp: i64,
    pub(crate) insn: Instruction,
}

impl<R: ?Sized> Deref for Inner<'_, R> {
    type Target = Instruction;

    fn deref(&self) -> &Self::Target {
        &self.insn
    }
}

impl<R: ?Sized> DerefMut for Inner<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.insn
    }
}

impl<'a, R: ReadBytes + ?Sized> Inner<'a, R> {
    pub(crate) fn new(
        opts: &'a Options,
        reader: &'a mut R,
        cache: ByteCache,
        filter: u32,
    ) -> Self {
        let address = cache.address();
        Self {
            opts,
            reader,
            cache,
            filter,
            full: false,
            disp: 0,
            insn: Instruction::new(address, opts.mode),
        }
    }

    #[inline]
    pub(crate) fn read_u8(&mut self, offset: usize) -> u8 {
        self.cache.read_u8(&mut *self.reader, offset)
    }

    #[inline]
    pub(crate) fn read_u16(&mut self, offset: usize) -> u16 {
        self.cache.read_u16(&mut *self.reader, offset)
    }

    #[inline]
    pub(crate) fn read_u32(&mut self, offset: usize) -> u32 {
        self.cache.read_u32(&mut *self.reader, offset)
    }

    #[inline]
    pub(crate) fn read_u64(&mut self, offset: usize) -> u64 {
        self.cache.read_u64(&mut *self.reader, offset)
    }

    pub(crate) fn latch(&mut self, kind: ErrorKind) {
        self.cache.latch(kind);
    }

    pub(crate) fn is_64bit(&self) -> bool {
        self.cpu_mode == CpuMode::Bits64
    }

    /// Operand mode after a mandatory prefix was consumed by a table selection.
    fn reset_op_mode(&mut self) {
        self.op_mode = match self.cpu_mode {
            CpuMode::Bits64 if self.rex_bit(rex::W) != 0 => CpuMode::Bits64,
            CpuMode::Bits64 => CpuMode::Bits32,
            mode => mode,
        };
    }

    /// Decodes one instruction, returns its length.
    pub(crate) fn decode(&mut self) -> usize {
        self.cache.ensure(&mut *self.reader, 0, 1);

        let map = if self.is_64bit() {
            &tables::ONE_BYTE_X64
        } else {
            &tables::ONE_BYTE_X86
        };

        let mut off = 0;
        loop {
            let byte = self.read_u8(off);
            let mut desc = &map[byte as usize];
            off += 1;

            let op = desc.opcode();
            if op.is_prefix() {
                if self.scan_prefix(op, desc, byte, off) {
                    continue;
                }
                self.insn.len = off as u8;
                return off;
            }

            // c4/c5 are les/lds outside of 64-bit mode unless the next byte is a register form
            if !self.is_64bit() && (byte == 0xc4 || byte == 0xc5) {
                let next = self.read_u8(off);
                if next & 0xc0 == 0xc0 {
                    desc = &tables::ONE_BYTE_X64[byte as usize];
                }
            }

            self.opcode_byte = byte;
            self.prefix_len = (off - 1) as u8;
            off = self.parse_instruction(off, desc);
            break;
        }

        if self.prefixes.any(prefix::LOCK) {
            self.validate_lock();
        }

        if off > MAX_INSN_LEN {
            log::debug!("{:#x}: instruction too long ({off} bytes)", self.address);
            self.latch(ErrorKind::TooLong);
            off = MAX_INSN_LEN;
        }
        self.insn.len = off as u8;
        off
    }

    /// Applies one prefix byte, returns `false` if scanning must stop.
    fn scan_prefix(&mut self, op: Opcode, desc: &Descriptor, byte: u8, off: usize) -> bool {
        if op == opcode::INVALID {
            log::debug!("{:#x}: invalid opcode {byte:#04x}", self.address);
            self.latch(ErrorKind::InvalidOpcode);
            self.desc = &INVALID_DESC;
            self.opcode_byte = byte;
            self.prefix_len = (off - 1) as u8;
            return false;
        }

        if op != opcode::PREFIX_REX {
            self.last_prefix = Some(op);
            if self.prefixes.any(prefix::REX) {
                // REX must be the last prefix before the opcode
                self.prefixes.clear(prefix::REX);
                if self.rex & rex::W != 0 {
                    self.op_mode = if self.prefixes.any(prefix::OPSIZE) {
                        CpuMode::Bits16
                    } else {
                        CpuMode::Bits32
                    };
                }
            }
        }

        match op {
            opcode::PREFIX_SEG => {
                let index = match desc.param(0) {
                    Param::Reg(FixedReg::Seg(index)) => index,
                    _ => seg::DS,
                };
                if self.opts.strict_segments && self.is_64bit() && index < seg::FS {
                    log::trace!("{:#x}: segment override {index} ignored", self.address);
                } else {
                    self.segment = index;
                    self.prefixes.set(prefix::SEG);
                }
            }
            opcode::PREFIX_LOCK => {
                self.prefixes.set(prefix::LOCK);
            }
            opcode::PREFIX_ADDRSIZE => {
                self.prefixes.set(prefix::ADDRSIZE);
                self.addr_mode = match self.cpu_mode {
                    CpuMode::Bits16 => CpuMode::Bits32,
                    CpuMode::Bits32 => CpuMode::Bits16,
                    CpuMode::Bits64 => CpuMode::Bits32,
                };
            }
            opcode::PREFIX_OPSIZE => {
                self.prefixes.set(prefix::OPSIZE);
                self.op_mode = match self.cpu_mode {
                    CpuMode::Bits16 => CpuMode::Bits32,
                    _ => CpuMode::Bits16,
                };
            }
            opcode::PREFIX_REP => {
                self.prefixes.set(prefix::REP);
            }
            opcode::PREFIX_REPNE => {
                self.prefixes.set(prefix::REPNE);
            }
            opcode::PREFIX_REX => {
                self.prefixes.set(prefix::REX);
                self.rex = byte & 0x0f;
                if self.rex & rex::W != 0 {
                    self.op_mode = CpuMode::Bits64;
                }
            }
            _ => {}
        }
        true
    }

    /// Resolves operands of `desc` starting at `off`, returns the offset past them.
    pub(crate) fn parse_instruction(&mut self, mut off: usize, desc: &'static Descriptor) -> usize {
        self.desc = desc;
        self.full = desc.flags() & self.filter != 0;

        for (slot, operand) in self.insn.operands.iter_mut().enumerate() {
            *operand = Operand::new(desc.param(slot));
        }

        if self.is_64bit() {
            if desc.has_flags(optype::FORCED_64_OP_SIZE) {
                self.op_mode = CpuMode::Bits64;
            } else if desc.has_flags(optype::DEFAULT_64_OP_SIZE)
                && !self.prefixes.any(prefix::OPSIZE)
            {
                self.op_mode = CpuMode::Bits64;
            }
        } else if desc.has_flags(optype::FORCED_32_OP_SIZE_X86) {
            self.op_mode = CpuMode::Bits32;
        }

        for (slot, &parse) in desc.parse().iter().enumerate() {
            if parse == Parse::Nop {
                continue;
            }
            off = if self.full {
                self.eval_full(parse, off, slot)
            } else {
                self.eval_size(parse, off, slot)
            };
            if parse.is_dispatch() {
                // the selected descriptor parsed its own operands
                return off;
            }
            if self.full {
                let size = self.operand_size(slot);
                self.operands[slot].size = size;
            }
        }

        if desc.is_invalid() {
            log::debug!(
                "{:#x}: invalid opcode {:#04x}",
                self.address,
                self.opcode_byte
            );
            self.latch(ErrorKind::InvalidOpcode);
        }
        off
    }

    /// Rewrites an illegal `lock` use to `ud2`.
    fn validate_lock(&mut self) {
        let memory_dst = self.desc.parse()[0].reads_modrm() && self.modrm.mode != 3;
        let legal = match self.desc.opcode() {
            opcode::CMPXCHG8B => true,
            opcode::BTC | opcode::BTR | opcode::BTS | opcode::CMPXCHG | opcode::XADD => {
                self.modrm.mode != 3
            }
            opcode::ADC
            | opcode::ADD
            | opcode::AND
            | opcode::DEC
            | opcode::INC
            | opcode::NEG
            | opcode::NOT
            | opcode::OR
            | opcode::SBB
            | opcode::SUB
            | opcode::XCHG
            | opcode::XOR => memory_dst,
            _ => false,
        };
        if !legal {
            log::debug!(
                "{:#x}: illegal lock prefix for {}",
                self.address,
                self.desc.mnemonic()
            );
            self.desc = &tables::TWO_BYTE[0x0b];
            for operand in self.insn.operands.iter_mut() {
                *operand = Operand::new(Param::None);
            }
        }
    }

    pub(crate) fn two_byte_esc(&mut self, mut off: usize) -> usize {
        let byte = self.read_u8(off);
        off += 1;
        self.opcode_byte = byte;

        let mut desc = &tables::TWO_BYTE[byte as usize];
        match self.last_prefix {
            Some(opcode::PREFIX_OPSIZE) => {
                if let Some(d) = tables::TWO_BYTE_66.get(byte) {
                    desc = d;
                    self.prefixes.clear(prefix::OPSIZE);
                    self.reset_op_mode();
                }
            }
            Some(opcode::PREFIX_REPNE) => {
                if let Some(d) = tables::TWO_BYTE_F2.get(byte) {
                    desc = d;
                    self.prefixes.clear(prefix::REPNE);
                }
            }
            Some(opcode::PREFIX_REP) => {
                if let Some(d) = tables::TWO_BYTE_F3.get(byte) {
                    desc = d;
                    self.prefixes.clear(prefix::REP);
                }
            }
            _ => {}
        }
        self.parse_instruction(off, desc)
    }

    /// `0f 38` escape.
    pub(crate) fn three_byte_esc4(&mut self, mut off: usize) -> usize {
        let byte = self.read_u8(off);
        off += 1;
        self.opcode_byte = byte;

        let mut desc = tables::THREE_BYTE_38.get(byte).unwrap_or(&INVALID_DESC);
        match self.last_prefix {
            Some(opcode::PREFIX_OPSIZE) => {
                if let Some(d) = tables::THREE_BYTE_66_38.get(byte) {
                    desc = d;
                    self.prefixes.clear(prefix::OPSIZE);
                    self.reset_op_mode();
                }
            }
            Some(opcode::PREFIX_REPNE) => {
                let both = self.prefixes.any(prefix::OPSIZE);
                match tables::THREE_BYTE_66F2_38.get(byte) {
                    Some(d) if both => {
                        desc = d;
                        self.prefixes.clear(prefix::OPSIZE | prefix::REPNE);
                        self.reset_op_mode();
                    }
                    _ => {
                        if let Some(d) = tables::THREE_BYTE_F2_38.get(byte) {
                            desc = d;
                            self.prefixes.clear(prefix::REPNE);
                        }
                    }
                }
            }
            Some(opcode::PREFIX_REP) => {
                if let Some(d) = tables::THREE_BYTE_F3_38.get(byte) {
                    desc = d;
                    self.prefixes.clear(prefix::REP);
                }
            }
            _ => {}
        }
        self.parse_instruction(off, desc)
    }

    /// `0f 3a` escape.
    pub(crate) fn three_byte_esc5(&mut self, mut off: usize) -> usize {
        let byte = self.read_u8(off);
        off += 1;
        self.opcode_byte = byte;

        let mut desc = tables::THREE_BYTE_3A.get(byte).unwrap_or(&INVALID_DESC);
        if self.last_prefix == Some(opcode::PREFIX_OPSIZE) {
            if let Some(d) = tables::THREE_BYTE_66_3A.get(byte) {
                desc = d;
                self.prefixes.clear(prefix::OPSIZE);
                self.reset_op_mode();
            }
        }
        self.parse_instruction(off, desc)
    }

    /// Selects a group member by the ModRM byte at `off` without consuming it.
    pub(crate) fn group(&mut self, parse: Parse, off: usize) -> usize {
        let modrm = ModRm::from_byte(self.read_u8(off));
        let reg = modrm.reg as usize;
        let op = self.opcode_byte as usize;
        let ext = if self.prefixes.any(prefix::OPSIZE) { 8 } else { 0 };

        let desc: &'static Descriptor = match parse {
            Parse::Grp1 => op
                .checked_sub(0x80)
                .and_then(|row| tables::GROUP1.get(row * 8 + reg))
                .unwrap_or(&INVALID_DESC),
            Parse::ShiftGrp2 => {
                let row = match op {
                    0xc0 => 0,
                    0xc1 => 1,
                    0xd0..=0xd3 => op - 0xd0 + 2,
                    _ => 6,
                };
                tables::GROUP2.get(row * 8 + reg).unwrap_or(&INVALID_DESC)
            }
            Parse::Grp3 => op
                .checked_sub(0xf6)
                .and_then(|row| tables::GROUP3.get(row * 8 + reg))
                .unwrap_or(&INVALID_DESC),
            Parse::Grp4 => &tables::GROUP4[reg],
            Parse::Grp5 => &tables::GROUP5[reg],
            Parse::Grp6 => &tables::GROUP6[reg],
            Parse::Grp7 => {
                let desc = if modrm.mode == 3 {
                    &tables::GROUP7_MOD11[reg][modrm.rm as usize]
                } else {
                    &tables::GROUP7_MEM[reg]
                };
                let mut end = self.parse_instruction(off, desc);
                if desc.misses_modrm() {
                    end += 1;
                }
                return end;
            }
            Parse::Grp8 => &tables::GROUP8[reg],
            Parse::Grp9 => {
                if modrm.mode == 3 {
                    &tables::GROUP9_MOD11[reg]
                } else {
                    &tables::GROUP9_MEM[reg]
                }
            }
            Parse::Grp10 => &tables::GROUP10[reg],
            Parse::Grp12 => &tables::GROUP12[reg + ext],
            Parse::Grp13 => &tables::GROUP13[reg + ext],
            Parse::Grp14 => &tables::GROUP14[reg + ext],
            Parse::Grp15 => {
                if modrm.mode == 3 {
                    &tables::GROUP15_MOD11[reg]
                } else {
                    &tables::GROUP15_MEM[reg]
                }
            }
            Parse::Grp16 => &tables::GROUP16[reg],
            Parse::Grp17 => &tables::GROUP17[(reg << 1) | self.vex.l as usize],
            _ => &INVALID_DESC,
        };
        self.parse_instruction(off, desc)
    }

    /// x87 escape `d8..df`.
    pub(crate) fn esc_fp(&mut self, off: usize) -> usize {
        let modrm = self.read_u8(off);
        let row = (self.opcode_byte as usize).wrapping_sub(0xd8) & 7;
        let desc = if modrm <= 0xbf {
            &tables::FPU_LOW[row][((modrm >> 3) & 7) as usize]
        } else {
            &tables::FPU_HIGH[row][(modrm - 0xc0) as usize]
        };
        let mut end = self.parse_instruction(off, desc);
        if desc.misses_modrm() {
            end += 1;
        }
        end
    }

    /// 3DNow! escape, the opcode is the byte after the addressing bytes.
    pub(crate) fn amd_3dnow(&mut self, off: usize) -> usize {
        self.modrm = ModRm::from_byte(self.read_u8(off));
        let end = self.query_modrm(off + 1);
        let suffix = self.read_u8(end);
        self.opcode_byte = suffix;

        let desc = tables::AMD_3DNOW.get(suffix).unwrap_or(&INVALID_DESC);
        self.parse_instruction(off, desc);
        end + 1
    }

    pub(crate) fn nop_pause(&mut self, off: usize) -> usize {
        let desc = if self.prefixes.any(prefix::REP) {
            self.prefixes.clear(prefix::REP);
            &tables::NOP_PAUSE[1]
        } else if self.is_64bit() && self.rex_bit(rex::B) != 0 {
            &tables::NOP_PAUSE[2]
        } else {
            &tables::NOP_PAUSE[0]
        };
        self.parse_instruction(off, desc)
    }

    /// Two byte VEX prefix `c5`.
    pub(crate) fn vex2b(&mut self, mut off: usize) -> usize {
        let byte = self.read_u8(off);
        let op = self.read_u8(off + 1);
        off += 2;
        self.opcode_byte = op;

        self.vex = Vex {
            l: byte & 0x04 != 0,
            w: false,
            vvvv: (!byte >> 3) & 0x0f,
        };
        if self.is_64bit() && byte & 0x80 == 0 {
            self.prefixes.set(prefix::REX);
            self.rex = rex::R;
        }
        self.prefixes.set(prefix::VEX);

        let desc = tables::VEX_MAPS[(byte & 3) as usize][1]
            .and_then(|map| map.get(op))
            .unwrap_or(&INVALID_DESC);
        self.parse_instruction(off, desc)
    }

    /// Three byte VEX prefix `c4`.
    pub(crate) fn vex3b(&mut self, mut off: usize) -> usize {
        let byte1 = self.read_u8(off);
        let byte2 = self.read_u8(off + 1);
        let op = self.read_u8(off + 2);
        off += 3;
        self.opcode_byte = op;

        let w = byte2 & 0x80 != 0;
        self.op_mode = if w && self.is_64bit() {
            CpuMode::Bits64
        } else {
            CpuMode::Bits32
        };
        if self.is_64bit() {
            self.rex |= (byte1 >> 5) ^ 7;
            if self.rex != 0 {
                self.prefixes.set(prefix::REX);
            }
        }
        self.vex = Vex {
            l: byte2 & 0x04 != 0,
            w,
            vvvv: (!byte2 >> 3) & 0x0f,
        };
        self.prefixes.set(prefix::VEX);

        let map = (byte1 & 0x1f) as usize;
        let desc = if map < 4 {
            tables::VEX_MAPS[(byte2 & 3) as usize][map].and_then(|map| map.get(op))
        } else {
            None
        };
        self.parse_instruction(off, desc.unwrap_or(&INVALID_DESC))
    }
}
