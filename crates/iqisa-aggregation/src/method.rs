//! The four method axes and their validated combination.

use std::fmt;
use std::str::FromStr;

use iqisa_core::errors::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Separator between axis tokens in a method label.
pub const LABEL_SEPARATOR: char = '_';

macro_rules! method_axis {
    (
        $(#[$meta:meta])*
        $name:ident, $axis:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in enumeration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable label token.
            pub fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $name {
            type Err = ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(ConfigurationError::UnknownToken {
                        axis: $axis,
                        token: other.to_string(),
                    }),
                }
            }
        }
    };
}

method_axis! {
    /// Central-tendency estimator applied to encoded forecasts.
    Center, "center" {
        /// Weighted arithmetic mean; the only center that honors decay weights.
        Arithmetic => "arith",
        Geometric => "geom",
        Median => "median",
    }
}

method_axis! {
    /// Space in which forecasts are averaged.
    Encoding, "encoding" {
        Raw => "probs",
        Odds => "odds",
        LogOdds => "logodds",
    }
}

method_axis! {
    /// Time-to-resolution weighting.
    Decay, "decay" {
        None => "nodec",
        Exponential => "dec",
    }
}

method_axis! {
    /// Transform that pushes probabilities away from 0.5.
    Extremize, "extremize" {
        /// `p^k / (p^k + (1-p)^k)` on the aggregate.
        Gjp => "gjpextr",
        /// `p^k` on the aggregate, without renormalizing.
        Post => "postextr",
        /// `p^d` with `d` derived from the group size.
        Ney => "neyextr",
        /// GJP transform on each forecast before aggregating.
        Before => "befextr",
        None => "noextr",
    }
}

/// One aggregation method: an immutable, compatible 4-tuple of axis choices.
///
/// Incompatible tuples cannot be constructed, so the aggregator never sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MethodConfig {
    center: Center,
    encoding: Encoding,
    decay: Decay,
    extremize: Extremize,
}

impl MethodConfig {
    /// Validate and build a method.
    ///
    /// Fails with [`ConfigurationError::IncompatibleMethod`] when the axes
    /// cannot be combined (see [`is_compatible`]).
    pub fn new(
        center: Center,
        encoding: Encoding,
        decay: Decay,
        extremize: Extremize,
    ) -> Result<Self, ConfigurationError> {
        if !is_compatible(center, encoding, decay) {
            return Err(ConfigurationError::IncompatibleMethod {
                center: center.to_string(),
                encoding: encoding.to_string(),
                decay: decay.to_string(),
            });
        }
        Ok(Self {
            center,
            encoding,
            decay,
            extremize,
        })
    }

    /// Central-tendency axis.
    pub fn center(&self) -> Center {
        self.center
    }

    /// Averaging-space axis.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Time-weighting axis.
    pub fn decay(&self) -> Decay {
        self.decay
    }

    /// Extremizing axis.
    pub fn extremize(&self) -> Extremize {
        self.extremize
    }

    /// Stable key, e.g. `arith_odds_dec_gjpextr`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

/// Compatibility rules between axes.
///
/// Log-odds pairs only with the median; decay weighting only with the
/// arithmetic mean, which is the only center with a weighted form.
pub fn is_compatible(center: Center, encoding: Encoding, decay: Decay) -> bool {
    let log_odds_ok = encoding != Encoding::LogOdds || center == Center::Median;
    let decay_ok = decay == Decay::None || center == Center::Arithmetic;
    log_odds_ok && decay_ok
}

impl fmt::Display for MethodConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.center,
            self.encoding,
            self.decay,
            self.extremize,
            sep = LABEL_SEPARATOR
        )
    }
}

impl FromStr for MethodConfig {
    type Err = ConfigurationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = label.split(LABEL_SEPARATOR).collect();
        let [center, encoding, decay, extremize] = parts.as_slice() else {
            return Err(ConfigurationError::MalformedLabel {
                label: label.to_string(),
            });
        };
        Self::new(
            center.parse()?,
            encoding.parse()?,
            decay.parse()?,
            extremize.parse()?,
        )
    }
}

impl TryFrom<String> for MethodConfig {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MethodConfig> for String {
    fn from(method: MethodConfig) -> Self {
        method.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_tokens_in_axis_order() {
        let m = MethodConfig::new(
            Center::Arithmetic,
            Encoding::Odds,
            Decay::Exponential,
            Extremize::Gjp,
        )
        .unwrap();
        assert_eq!(m.label(), "arith_odds_dec_gjpextr");
    }

    #[test]
    fn label_parses_back() {
        let m: MethodConfig = "median_logodds_nodec_befextr".parse().unwrap();
        assert_eq!(m.center(), Center::Median);
        assert_eq!(m.encoding(), Encoding::LogOdds);
        assert_eq!(m.decay(), Decay::None);
        assert_eq!(m.extremize(), Extremize::Before);
    }

    #[test]
    fn incompatible_tuples_are_rejected() {
        for center in [Center::Arithmetic, Center::Geometric] {
            let err = MethodConfig::new(center, Encoding::LogOdds, Decay::None, Extremize::None)
                .unwrap_err();
            assert!(matches!(err, ConfigurationError::IncompatibleMethod { .. }));
        }
        for center in [Center::Geometric, Center::Median] {
            assert!(
                MethodConfig::new(center, Encoding::Raw, Decay::Exponential, Extremize::None)
                    .is_err()
            );
        }
        assert!("geom_logodds_nodec_noextr".parse::<MethodConfig>().is_err());
    }

    #[test]
    fn malformed_labels_are_rejected() {
        assert!(matches!(
            "arith_probs_nodec".parse::<MethodConfig>(),
            Err(ConfigurationError::MalformedLabel { .. })
        ));
        assert!(matches!(
            "mode_probs_nodec_noextr".parse::<MethodConfig>(),
            Err(ConfigurationError::UnknownToken { axis: "center", .. })
        ));
    }
}
