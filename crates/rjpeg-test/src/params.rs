//! Regression test parameters and operations

use rjpeg_core::ImageBuffer;

/// Regression test parameters
///
/// Tracks the test name, comparison index, and accumulated failures
/// across one regression test.
pub struct RegParams {
    /// Name of the test (e.g., "resample")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two images channel value by channel value
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected image
    /// * `actual` - Actual computed image
    /// * `delta` - Maximum allowed per-value difference (0 for exact)
    ///
    /// # Returns
    ///
    /// `true` if geometry matches and every value is within delta.
    pub fn compare_images(&mut self, expected: &ImageBuffer, actual: &ImageBuffer, delta: u8) -> bool {
        self.index += 1;

        if expected.width() != actual.width()
            || expected.height() != actual.height()
            || expected.is_gray() != actual.is_gray()
        {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - geometry mismatch\n\
                 expected {}x{} gray={}, actual {}x{} gray={}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.is_gray(),
                actual.width(),
                actual.height(),
                actual.is_gray()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for (i, (&e, &a)) in expected.pixels().iter().zip(actual.pixels()).enumerate() {
            if e.abs_diff(a) > delta {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - value mismatch at byte {}\n\
                     expected = {}, actual = {}, allowed delta = {}",
                    self.test_name, self.index, i, e, a, delta
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Record an arbitrary pass/fail condition
    ///
    /// # Returns
    ///
    /// The value of `condition`.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if !condition {
            let msg = format!(
                "Failure in {}_reg: condition for index {}: {}",
                self.test_name, self.index, what
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
    }

    #[test]
    fn test_compare_images_geometry_mismatch() {
        let a = ImageBuffer::new(2, 2, true).unwrap();
        let b = ImageBuffer::new(2, 3, true).unwrap();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_images(&a, &b, 0));
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images_within_delta() {
        let a = ImageBuffer::from_raw(2, 1, true, 100, vec![10, 20]).unwrap();
        let b = ImageBuffer::from_raw(2, 1, true, 100, vec![11, 19]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_images(&a, &b, 1));
        assert!(!rp.compare_images(&a, &b, 0));
    }
}
