//! Language and dialect detection from file extensions

use std::path::Path;

use crate::error::{CodesiftError, Result};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    CSharp,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Vue,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CodesiftError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "cs" => Ok(Self::CSharp),
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "vue" => Ok(Self::Vue),
            _ => Err(CodesiftError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Vue => "vue",
        }
    }

    /// Dialects whose pattern sets apply to this language
    ///
    /// JavaScript-family files feed both the plain function/class dialect
    /// and the React component dialect; the extractor dispatch runs every
    /// applicable pattern set over the same file text.
    pub fn dialects(&self) -> &'static [Dialect] {
        match self {
            Self::CSharp => &[Dialect::CSharp],
            Self::JavaScript | Self::Jsx | Self::TypeScript | Self::Tsx => {
                &[Dialect::JavaScript, Dialect::React]
            }
            Self::Vue => &[Dialect::Vue],
        }
    }

    /// Check if this is a JavaScript-family language
    pub fn is_javascript_family(&self) -> bool {
        matches!(
            self,
            Self::JavaScript | Self::Jsx | Self::TypeScript | Self::Tsx
        )
    }

    /// Common file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::CSharp => &["cs"],
            Self::JavaScript => &["js", "mjs", "cjs"],
            Self::Jsx => &["jsx"],
            Self::TypeScript => &["ts", "mts", "cts"],
            Self::Tsx => &["tsx"],
            Self::Vue => &["vue"],
        }
    }
}

/// Entity-shape dialects recognized by dedicated pattern sets
///
/// A dialect selects one pattern table and one result set; a single
/// language can participate in several dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// C# classes with method members
    CSharp,
    /// Plain JS/TS functions and classes
    JavaScript,
    /// React components (function, arrow, class forms)
    React,
    /// Vue single-file components
    Vue,
}

impl Dialect {
    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::JavaScript => "javascript",
            Self::React => "react",
            Self::Vue => "vue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_language_detection() {
        assert_eq!(Lang::from_extension("cs").unwrap(), Lang::CSharp);
        assert_eq!(Lang::from_extension("js").unwrap(), Lang::JavaScript);
        assert_eq!(Lang::from_extension("jsx").unwrap(), Lang::Jsx);
        assert_eq!(Lang::from_extension("ts").unwrap(), Lang::TypeScript);
        assert_eq!(Lang::from_extension("tsx").unwrap(), Lang::Tsx);
        assert_eq!(Lang::from_extension("vue").unwrap(), Lang::Vue);
        assert_eq!(Lang::from_extension("CS").unwrap(), Lang::CSharp);
    }

    #[test]
    fn test_language_from_path() {
        let path = PathBuf::from("src/components/App.tsx");
        assert_eq!(Lang::from_path(&path).unwrap(), Lang::Tsx);

        let path = PathBuf::from("Services/Greeter.cs");
        assert_eq!(Lang::from_path(&path).unwrap(), Lang::CSharp);
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(Lang::from_extension("rb").is_err());
        assert!(Lang::from_path(Path::new("Makefile")).is_err());
    }

    #[test]
    fn test_dialect_mapping() {
        assert_eq!(Lang::CSharp.dialects(), &[Dialect::CSharp]);
        assert_eq!(
            Lang::Tsx.dialects(),
            &[Dialect::JavaScript, Dialect::React]
        );
        assert_eq!(Lang::Vue.dialects(), &[Dialect::Vue]);
    }

    #[test]
    fn test_javascript_family() {
        assert!(Lang::JavaScript.is_javascript_family());
        assert!(Lang::Tsx.is_javascript_family());
        assert!(!Lang::CSharp.is_javascript_family());
        assert!(!Lang::Vue.is_javascript_family());
    }
}
