/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i64;
    fn prefix(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Accepted spellings of the prefix, display form first.
    fn prefixes(&self) -> &'static [&'static str];

    fn multiplier(&self) -> f64 {
        (Self::BASE as f64).powi(self.power() as i32)
    }

    /// Every combination of prefix spelling and unit symbol. The
    /// first entry combines the display forms.
    fn abbreviations(&self, symbols: &[&str]) -> Vec<String> {
        self.prefixes()
            .iter()
            .flat_map(|p| symbols.iter().map(move |s| format!("{}{}", p, s)))
            .collect()
    }
}
