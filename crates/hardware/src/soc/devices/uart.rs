//! Universal Asynchronous Receiver-Transmitter (UART).
//!
//! Implements the subset of a 16550-compatible UART the guest kernel drives.
//! Handles the standard registers (RBR, THR, IER, IIR, FCR, LCR, MCR, LSR) and the
//! divisor latch. Host I/O is decoupled from the guest: the embedder injects keys with
//! [`Uart::keypress`] and drains transmitted bytes with [`Uart::read`] or
//! [`Uart::drain_output`] between simulation slices.

use std::collections::VecDeque;

use crate::common::ExceptionKind;
use crate::soc::traits::Device;

/// Receiver Buffer Register (Read) / Divisor Latch Low (DLAB=1).
const REG_RBR: u32 = 0;
/// Transmitter Holding Register (Write) / Divisor Latch Low (DLAB=1).
const REG_THR: u32 = 0;
/// Interrupt Enable Register / Divisor Latch High (DLAB=1).
const REG_IER: u32 = 1;
/// Interrupt Identity Register (Read).
const REG_IIR: u32 = 2;
/// FIFO Control Register (Write).
const REG_FCR: u32 = 2;
/// Line Control Register.
const REG_LCR: u32 = 3;
/// Modem Control Register.
const REG_MCR: u32 = 4;
/// Line Status Register.
const REG_LSR: u32 = 5;

/// Interrupt Identity Register: No interrupt pending.
const IIR_NO_INTERRUPT: u8 = 0x01;

/// Interrupt Identity Register: Transmitter Holding Register Empty interrupt.
const IIR_THRE: u8 = 0x02;

/// Interrupt Identity Register: Receiver Data Available interrupt.
const IIR_RDA: u8 = 0x04;

/// Interrupt Identity Register: FIFOs enabled (bits 7:6).
const IIR_FIFO_ENABLED: u8 = 0xC0;

/// Line Status Register: Data ready bit (receiver has data).
const LSR_DATA_READY: u8 = 0x01;

/// Line Status Register: Transmitter Holding Register Empty.
const LSR_THRE: u8 = 0x20;

/// Line Status Register: Transmitter Empty (both THR and shift register empty).
const LSR_TEMT: u8 = 0x40;

/// Default Line Status Register value (transmitter always ready).
const LSR_DEFAULT: u8 = LSR_THRE | LSR_TEMT;

/// Line Control Register: Divisor Latch Access Bit (enables baud rate programming).
const LCR_DLAB: u8 = 0x80;

/// Line Control Register reset value: 8 data bits.
const LCR_RESET: u8 = 0x03;

/// Interrupt Enable Register: Receiver Data Available interrupt enable.
const IER_RDA: u8 = 0x01;

/// Interrupt Enable Register: Transmitter Holding Register Empty interrupt enable.
const IER_THRE: u8 = 0x02;

/// FIFO Control Register: FIFO enable.
const FCR_ENABLE: u8 = 0x01;

/// UART device structure.
#[derive(Debug)]
pub struct Uart {
    /// Bytes injected by the host, waiting for the guest to read RBR.
    rx_fifo: VecDeque<u8>,
    /// Bytes written by the guest, waiting for the host to drain.
    tx_fifo: VecDeque<u8>,
    /// Interrupt Enable Register.
    ier: u8,
    /// Line Control Register.
    lcr: u8,
    /// Modem Control Register.
    mcr: u8,
    /// Divisor Latch Low.
    dll: u8,
    /// Divisor Latch High.
    dlm: u8,
    /// Set by FCR bit 0; reported in IIR bits 7:6.
    fifo_enabled: bool,
    /// Transmitter Holding Register Empty interrupt pending.
    thre_ip: bool,
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}

impl Uart {
    /// Creates a UART in its reset state.
    pub const fn new() -> Self {
        Self {
            rx_fifo: VecDeque::new(),
            tx_fifo: VecDeque::new(),
            ier: 0,
            lcr: LCR_RESET,
            mcr: 0,
            dll: 0,
            dlm: 0,
            fifo_enabled: false,
            thre_ip: false,
        }
    }

    /// Queues a byte for the guest to receive.
    pub fn keypress(&mut self, byte: u8) {
        self.rx_fifo.push_back(byte);
    }

    /// Returns `true` when the guest has transmitted bytes the host has not read.
    pub fn can_read(&self) -> bool {
        !self.tx_fifo.is_empty()
    }

    /// Pops the oldest transmitted byte, if any.
    pub fn read(&mut self) -> Option<u8> {
        self.tx_fifo.pop_front()
    }

    /// Takes every pending transmitted byte.
    pub fn drain_output(&mut self) -> Vec<u8> {
        self.tx_fifo.drain(..).collect()
    }

    /// Returns `true` while the UART drives its interrupt line.
    pub fn interrupt_asserted(&self) -> bool {
        self.data_ready_interrupt() || self.thre_interrupt()
    }

    fn data_ready_interrupt(&self) -> bool {
        !self.rx_fifo.is_empty() && (self.ier & IER_RDA) != 0
    }

    fn thre_interrupt(&self) -> bool {
        (self.ier & IER_THRE) != 0 && self.thre_ip
    }

    /// Checks if Divisor Latch Access Bit (DLAB) is set in LCR.
    fn dlab_set(&self) -> bool {
        (self.lcr & LCR_DLAB) != 0
    }

    /// Reads Receiver Buffer Register (RBR) or Divisor Latch Low (DLL).
    fn read_rbr_or_dll(&mut self) -> u8 {
        if self.dlab_set() {
            self.dll
        } else {
            self.rx_fifo.pop_front().unwrap_or(0)
        }
    }

    /// Reads Interrupt Enable Register (IER) or Divisor Latch High (DLM).
    const fn read_ier_or_dlm(&self) -> u8 {
        if (self.lcr & LCR_DLAB) != 0 {
            self.dlm
        } else {
            self.ier
        }
    }

    /// Reads Interrupt Identity Register (IIR).
    ///
    /// Receive-data-available takes priority over THRE. Reading clears a pending THRE
    /// interrupt.
    fn read_iir(&mut self) -> u8 {
        let mut iir = if self.fifo_enabled {
            IIR_FIFO_ENABLED
        } else {
            0
        };
        if !self.interrupt_asserted() {
            iir |= IIR_NO_INTERRUPT;
        }
        if self.data_ready_interrupt() {
            iir |= IIR_RDA;
        } else if self.thre_interrupt() {
            iir |= IIR_THRE;
        }
        self.thre_ip = false;
        iir
    }

    /// Reads Line Status Register (LSR).
    fn read_lsr(&self) -> u8 {
        let mut lsr = LSR_DEFAULT;
        if !self.rx_fifo.is_empty() {
            lsr |= LSR_DATA_READY;
        }
        lsr
    }

    /// Writes Transmitter Holding Register (THR) or Divisor Latch Low (DLL).
    fn write_thr_or_dll(&mut self, val: u8) {
        if self.dlab_set() {
            self.dll = val;
        } else {
            self.tx_fifo.push_back(val);
            self.thre_ip = (self.ier & IER_THRE) != 0;
        }
    }

    /// Writes Interrupt Enable Register (IER) or Divisor Latch High (DLM).
    fn write_ier_or_dlm(&mut self, val: u8) {
        if self.dlab_set() {
            self.dlm = val;
        } else {
            self.ier = val;
        }
    }
}

impl Device for Uart {
    fn load8(&mut self, offset: u32) -> Result<u8, ExceptionKind> {
        Ok(match offset {
            REG_RBR => self.read_rbr_or_dll(),
            REG_IER => self.read_ier_or_dlm(),
            REG_IIR => self.read_iir(),
            REG_LCR => self.lcr,
            REG_MCR => self.mcr,
            REG_LSR => self.read_lsr(),
            // MSR and the scratch register are not modeled.
            _ => 0,
        })
    }

    /// The register file is byte-wide; wider accesses are bus errors.
    fn load16(&mut self, _offset: u32) -> Result<u16, ExceptionKind> {
        Err(ExceptionKind::BusError)
    }

    fn load32(&mut self, _offset: u32) -> Result<u32, ExceptionKind> {
        Err(ExceptionKind::BusError)
    }

    fn store8(&mut self, offset: u32, val: u8) -> Result<(), ExceptionKind> {
        match offset {
            REG_THR => self.write_thr_or_dll(val),
            REG_IER => self.write_ier_or_dlm(val),
            REG_FCR => self.fifo_enabled = (val & FCR_ENABLE) != 0,
            REG_LCR => self.lcr = val,
            REG_MCR => self.mcr = val,
            _ => {}
        }
        Ok(())
    }

    fn store16(&mut self, _offset: u32, _val: u16) -> Result<(), ExceptionKind> {
        Err(ExceptionKind::BusError)
    }

    fn store32(&mut self, _offset: u32, _val: u32) -> Result<(), ExceptionKind> {
        Err(ExceptionKind::BusError)
    }
}
