// src/course/style.rs

//! Teaching styles applied to module generation.
//!
//! Each style carries a prompt style guide modelled on a well-known
//! educator; the guide text is handed to the module generator verbatim as
//! part of the generation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Teaching style selectable on the course form (or via configuration when
/// the form leaves it unset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeachingStyle {
    #[default]
    General,
    Feynman,
    Mankiw,
    Krugman,
    Liskov,
    Knuth,
}

impl TeachingStyle {
    /// The prompt style guide for this teaching style.
    pub fn style_guide(self) -> &'static str {
        match self {
            TeachingStyle::General => {
                "Use a clear, straightforward teaching approach with concise explanations."
            }
            TeachingStyle::Feynman => {
                "Use Richard Feynman's teaching approach:\n\
                 1. Break down complex topics into simple, intuitive concepts\n\
                 2. Use everyday analogies and metaphors\n\
                 3. Focus on building deep understanding rather than memorization\n\
                 4. Explain concepts as if teaching to a complete beginner\n\
                 5. Emphasize fundamental principles over technical details"
            }
            TeachingStyle::Mankiw => {
                "Use Greg Mankiw's teaching approach:\n\
                 1. Present economic principles with clear real-world examples\n\
                 2. Structure content with key principles and applications\n\
                 3. Balance theoretical frameworks with practical implications\n\
                 4. Use policy applications to illustrate concepts\n\
                 5. Employ a methodical, step-by-step approach to complex topics"
            }
            TeachingStyle::Krugman => {
                "Use Paul Krugman's teaching approach:\n\
                 1. Focus on data-driven analysis and empirical evidence\n\
                 2. Present contrasting viewpoints with critical analysis\n\
                 3. Connect abstract concepts to current events and real-world scenarios\n\
                 4. Use accessible language while maintaining technical accuracy\n\
                 5. Emphasize the practical implications of theoretical concepts"
            }
            TeachingStyle::Liskov => {
                "Use Barbara Liskov's teaching approach:\n\
                 1. Present programming concepts with formal precision\n\
                 2. Emphasize abstractions and their implementations\n\
                 3. Focus on design principles and best practices\n\
                 4. Build concepts progressively from foundations to advanced topics\n\
                 5. Illustrate concepts with clear, minimal code examples"
            }
            TeachingStyle::Knuth => {
                "Use Donald Knuth's teaching approach:\n\
                 1. Present algorithms with mathematical rigor and precision\n\
                 2. Analyze content from first principles with thorough explanation\n\
                 3. Include detailed examples with step-by-step execution\n\
                 4. Balance theoretical foundations with practical implementation details\n\
                 5. Emphasize elegance and efficiency in problem-solving"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TeachingStyle::General => "general",
            TeachingStyle::Feynman => "feynman",
            TeachingStyle::Mankiw => "mankiw",
            TeachingStyle::Krugman => "krugman",
            TeachingStyle::Liskov => "liskov",
            TeachingStyle::Knuth => "knuth",
        }
    }
}

impl fmt::Display for TeachingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeachingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(TeachingStyle::General),
            "feynman" => Ok(TeachingStyle::Feynman),
            "mankiw" => Ok(TeachingStyle::Mankiw),
            "krugman" => Ok(TeachingStyle::Krugman),
            "liskov" => Ok(TeachingStyle::Liskov),
            "knuth" => Ok(TeachingStyle::Knuth),
            other => Err(format!(
                "unknown teaching style: {other} (expected one of \
                 \"general\", \"feynman\", \"mankiw\", \"krugman\", \"liskov\", \"knuth\")"
            )),
        }
    }
}
