use super::{super::ThresholdType, Config};
use crate::mod_base::ModBase;

impl Config {
    pub fn alignment_path(&self) -> &str {
        &self.alignment_path
    }

    pub fn reference_path(&self) -> &str {
        &self.reference_path
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(|x| x as &str)
    }

    pub fn read_group(&self) -> Option<&str> {
        self.read_group.as_ref().map(|x| x as &str)
    }

    pub fn mod_base(&self) -> ModBase {
        self.mod_base
    }

    pub fn threshold(&self, t: ThresholdType) -> u8 {
        self.thresholds[t.idx()]
    }

    pub fn low_threshold(&self) -> u8 {
        self.threshold(ThresholdType::Canonical)
    }

    pub fn high_threshold(&self) -> u8 {
        self.threshold(ThresholdType::Modified)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn cpg_only(&self) -> bool {
        self.cpg_only
    }

    pub fn extended_output(&self) -> bool {
        self.extended_output
    }
}
