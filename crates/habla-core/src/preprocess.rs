use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default chat preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds stylized glyphs into plain letters
        text.nfkc().collect::<String>().trim().to_string()
    }

    /// Length as counted against the character limit
    fn measure(&self, text: &str) -> usize {
        text.chars().count()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
