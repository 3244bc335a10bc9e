//! Tone disclaimer shown at the top of article pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclaimerVariant {
    Disclaimer,
    Academic,
    Therapist,
    Commitment,
    #[default]
    Random,
}

/// A concrete variant, after `Random` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclaimerStyle {
    Disclaimer,
    Academic,
    Therapist,
    Commitment,
}

impl DisclaimerStyle {
    pub const ALL: [DisclaimerStyle; 4] = [
        DisclaimerStyle::Disclaimer,
        DisclaimerStyle::Academic,
        DisclaimerStyle::Therapist,
        DisclaimerStyle::Commitment,
    ];

    pub fn copy(self) -> DisclaimerCopy {
        match self {
            DisclaimerStyle::Disclaimer => DisclaimerCopy {
                title: "⚠️ Content Warning: Excessive Sarcasm Ahead",
                paragraphs: &[
                    "This analysis contains traces of sarcasm, dad jokes, and occasional questionable life choice. Side effects may include: uncontrollable eye-rolling, sudden desire to fact-check everything.",
                    "Disclaimer: All data is real. All insights are genuine. The jokes are just how I survive staring at data for far too long.",
                ],
                accent: "yellow",
            },
            DisclaimerStyle::Academic => DisclaimerCopy {
                title: "⚠️ Academic Disclosure (Sort Of)",
                paragraphs: &[
                    "This document attempts to maintain academic rigor while simultaneously questioning every decision that led to its creation. Think of it as a thesis defense, but the defense is mostly \"I was curious and things got out of hand.\"",
                    "Methodology: Legitimate data analysis. Presentation style: Stand-up comedy meets TED Talk meets therapy session. Author's mental state: Questionable but functional.",
                ],
                accent: "blue",
            },
            DisclaimerStyle::Therapist => DisclaimerCopy {
                title: "⚠️ A Note From The Author's Inner Monologue",
                paragraphs: &[
                    "You're about to read an analysis written by someone who thought \"I'll just do a quick exploration\" and ended up three weeks deep in data. The analysis is solid. The commentary is how I process the realization that this is what I do for fun now.",
                    "If you're here for dry, formal analysis: this ain't it, chief. If you're here for data delivered with the energy of someone who's had too much coffee and made it everyone else's problem: welcome home.",
                ],
                accent: "purple",
            },
            DisclaimerStyle::Commitment => DisclaimerCopy {
                title: "⚠️ Before You Commit To This Journey",
                paragraphs: &[
                    "Fair warning: this analysis is presented in a tone best described as \"professionally unhinged.\" The data is real, the insights are valid, and the delivery is... well, it's a choice. My choice. A choice I'm making you live with now.",
                    "What you'll get: Accurate analysis, useful insights, occasional existential commentary. What you won't get: Boring corporate jargon, unnecessarily complex sentences, pretending I didn't spend my weekend doing this voluntarily.",
                ],
                accent: "green",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisclaimerCopy {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Color family of the banner.
    pub accent: &'static str,
}

/// Source of the index used for `Random`.
pub trait VariantPicker {
    /// Index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks from the operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl VariantPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        match getrandom::u32() {
            Ok(value) => value as usize % len.max(1),
            Err(error) => {
                log::warn!("random source unavailable ({error}), using the first disclaimer");
                0
            }
        }
    }
}

impl DisclaimerVariant {
    pub fn resolve(self, picker: &mut dyn VariantPicker) -> DisclaimerStyle {
        match self {
            DisclaimerVariant::Disclaimer => DisclaimerStyle::Disclaimer,
            DisclaimerVariant::Academic => DisclaimerStyle::Academic,
            DisclaimerVariant::Therapist => DisclaimerStyle::Therapist,
            DisclaimerVariant::Commitment => DisclaimerStyle::Commitment,
            DisclaimerVariant::Random => {
                let styles = DisclaimerStyle::ALL;
                styles[picker.pick(styles.len()) % styles.len()]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerBanner {
    style: DisclaimerStyle,
    dismissible: bool,
    visible: bool,
}

impl DisclaimerBanner {
    /// Resolve the variant once, at mount.
    pub fn new(variant: DisclaimerVariant, dismissible: bool, picker: &mut dyn VariantPicker) -> Self {
        Self {
            style: variant.resolve(picker),
            dismissible,
            visible: true,
        }
    }

    pub fn style(&self) -> DisclaimerStyle {
        self.style
    }

    pub fn copy(&self) -> DisclaimerCopy {
        self.style.copy()
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the banner. Returns `false` when it cannot be dismissed.
    pub fn dismiss(&mut self) -> bool {
        if self.dismissible {
            self.visible = false;
        }
        self.dismissible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl VariantPicker for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn concrete_variants_ignore_picker() {
        assert_eq!(
            DisclaimerVariant::Therapist.resolve(&mut Fixed(0)),
            DisclaimerStyle::Therapist
        );
    }

    #[test]
    fn random_maps_onto_every_style() {
        let picked: Vec<_> = (0..4)
            .map(|index| DisclaimerVariant::Random.resolve(&mut Fixed(index)))
            .collect();
        assert_eq!(picked, DisclaimerStyle::ALL);
    }

    #[test]
    fn random_picker_stays_in_range() {
        let mut picker = RandomPicker;
        for _ in 0..32 {
            assert!(picker.pick(4) < 4);
        }
    }

    #[test]
    fn every_style_has_copy() {
        for style in DisclaimerStyle::ALL {
            let copy = style.copy();
            assert!(copy.title.starts_with("⚠️"));
            assert_eq!(copy.paragraphs.len(), 2);
        }
    }

    #[test]
    fn only_dismissible_banner_hides() {
        let mut fixed = DisclaimerBanner::new(DisclaimerVariant::Academic, false, &mut Fixed(0));
        assert!(!fixed.dismiss());
        assert!(fixed.is_visible());

        let mut closable = DisclaimerBanner::new(DisclaimerVariant::Random, true, &mut Fixed(3));
        assert_eq!(closable.style(), DisclaimerStyle::Commitment);
        assert!(closable.dismiss());
        assert!(!closable.is_visible());
    }
}
