//! In-memory NOR flash used by the storage and registry tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_storage::nor_flash::{ErrorType, NorFlash, NorFlashErrorKind, ReadNorFlash};

pub const ERASE_SIZE: usize = 4096;

/// Fault injection switches shared by every handle of a [`RamFlash`].
#[derive(Default)]
pub struct Faults {
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

/// RAM-backed flash chip with NOR semantics (writes can only clear bits).
///
/// Cloning yields another handle to the same chip, which is how the tests
/// simulate a reboot.
#[derive(Clone)]
pub struct RamFlash {
    data: Rc<RefCell<Vec<u8>>>,
    faults: Rc<Faults>,
}

impl RamFlash {
    pub fn new(blocks: usize) -> Self {
        Self {
            data: Rc::new(RefCell::new(vec![0xFF; blocks * ERASE_SIZE])),
            faults: Rc::new(Faults::default()),
        }
    }

    pub fn faults(&self) -> Rc<Faults> {
        Rc::clone(&self.faults)
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.data.borrow().clone()
    }

    fn check(&self, offset: u32, len: usize) -> Result<(usize, usize), NorFlashErrorKind> {
        let start = offset as usize;
        let end = start + len;
        if end > self.data.borrow().len() {
            return Err(NorFlashErrorKind::OutOfBounds);
        }
        Ok((start, end))
    }
}

impl ErrorType for RamFlash {
    type Error = NorFlashErrorKind;
}

impl ReadNorFlash for RamFlash {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        if self.faults.fail_reads.get() {
            return Err(NorFlashErrorKind::Other);
        }
        let (start, end) = self.check(offset, bytes.len())?;
        bytes.copy_from_slice(&self.data.borrow()[start..end]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.data.borrow().len()
    }
}

impl NorFlash for RamFlash {
    const WRITE_SIZE: usize = 4;
    const ERASE_SIZE: usize = ERASE_SIZE;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        if self.faults.fail_writes.get() {
            return Err(NorFlashErrorKind::Other);
        }
        if from as usize % ERASE_SIZE != 0 || to as usize % ERASE_SIZE != 0 {
            return Err(NorFlashErrorKind::NotAligned);
        }
        let (start, end) = self.check(from, (to - from) as usize)?;
        self.data.borrow_mut()[start..end].fill(0xFF);
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.faults.fail_writes.get() {
            return Err(NorFlashErrorKind::Other);
        }
        if offset as usize % Self::WRITE_SIZE != 0 || bytes.len() % Self::WRITE_SIZE != 0 {
            return Err(NorFlashErrorKind::NotAligned);
        }
        let (start, end) = self.check(offset, bytes.len())?;
        let mut data = self.data.borrow_mut();
        for (cell, byte) in data[start..end].iter_mut().zip(bytes) {
            *cell &= *byte;
        }
        self.faults.writes.set(self.faults.writes.get() + 1);
        Ok(())
    }
}
