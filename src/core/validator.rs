use std::io::Write;

use crate::core::version::NodeVersion;
use crate::Result;

/// Outcome of validating the running Node.js version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Versions are compatible. Nothing is written and startup proceeds.
    Pass,
    /// Incompatible, but the override variable is set. The message goes to
    /// the error stream and startup proceeds anyway.
    Warn { message: String },
    /// Incompatible with no override. The message goes to the error stream
    /// and the process must terminate with status 1.
    Fatal { message: String },
}

impl Verdict {
    /// The message to emit on the error stream, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Warn { message } | Verdict::Fatal { message } => Some(message),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Verdict::Fatal { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn { .. } => "warn",
            Verdict::Fatal { .. } => "fatal",
        }
    }
}

/// Startup guard comparing the live Node.js version against the version the
/// hosting application was built for.
///
/// Major and minor must match the requirement exactly, in both directions; a
/// patch equal to or above the requirement is accepted. Classification is a
/// pure function of the two version strings and the override flag, so a
/// repeated evaluation with the same inputs always yields the same verdict.
pub struct VersionGuard {
    host_name: String,
    override_env: String,
    required_raw: String,
    required: NodeVersion,
}

impl VersionGuard {
    /// Build a guard for a host application.
    ///
    /// `required` must be a well-formed `vMAJOR.MINOR.PATCH` string; it is
    /// kept verbatim for message text and parsed once for comparison.
    pub fn new(host_name: &str, required: &str, override_env: &str) -> Result<Self> {
        let parsed = NodeVersion::parse(required)?;
        Ok(Self {
            host_name: host_name.to_string(),
            override_env: override_env.to_string(),
            required_raw: required.to_string(),
            required: parsed,
        })
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn required(&self) -> &str {
        &self.required_raw
    }

    pub fn override_env(&self) -> &str {
        &self.override_env
    }

    fn is_supported(&self, current: &NodeVersion) -> bool {
        current.major == self.required.major
            && current.minor == self.required.minor
            && current.patch >= self.required.patch
    }

    /// Classify the current runtime version.
    ///
    /// The raw `current` string appears verbatim in any message; parsing is
    /// only used for the comparison itself.
    pub fn evaluate(&self, current: &str, override_present: bool) -> Result<Verdict> {
        let parsed = NodeVersion::parse(current)?;

        if self.is_supported(&parsed) {
            tracing::debug!(
                "node {} satisfies required {}",
                current,
                self.required_raw
            );
            return Ok(Verdict::Pass);
        }

        tracing::debug!(
            "node {} outside supported range for required {}",
            current,
            self.required_raw
        );

        let mut message = format!(
            "{} was built with {} and does not support the current Node.js version {}. ",
            self.host_name, self.required_raw, current
        );

        if override_present {
            message.push_str(&format!(
                "\nBecause the {} environment variable is set, any node version incompatibilities will be ignored.\n",
                self.override_env
            ));
            Ok(Verdict::Warn { message })
        } else {
            message.push_str(&format!(
                "Please use Node.js {} or a higher patch version.\n",
                self.required_raw
            ));
            Ok(Verdict::Fatal { message })
        }
    }
}

/// Write a verdict's message to the error stream and return the exit status
/// the caller should apply (0, or 1 for a fatal verdict).
///
/// Termination stays with the caller so classification and reporting can be
/// exercised against an in-memory sink.
pub fn enforce<W: Write>(verdict: &Verdict, stderr: &mut W) -> std::io::Result<i32> {
    match verdict {
        Verdict::Pass => Ok(0),
        Verdict::Warn { message } => {
            write!(stderr, "{}", message)?;
            Ok(0)
        }
        Verdict::Fatal { message } => {
            write!(stderr, "{}", message)?;
            Ok(1)
        }
    }
}
