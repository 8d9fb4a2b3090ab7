//! Detector for the ten-key easter egg sequence.

use crate::constants::KONAMI_CODE;

#[derive(Clone, Copy, Debug, Default)]
pub struct KonamiDetector {
    index: usize,
}

impl KonamiDetector {
    /// Number of keys of the sequence matched so far.
    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one `KeyboardEvent.code`. Returns `true` when this key completes
    /// the sequence. A wrong key drops all progress, and is not itself
    /// counted as the start of a new attempt.
    pub fn feed(&mut self, code: &str) -> bool {
        if KONAMI_CODE.get(self.index) == Some(&code) {
            self.index += 1;
            if self.index == KONAMI_CODE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }
}
