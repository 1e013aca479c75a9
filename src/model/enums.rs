//! Closed value sets stored as text columns and exchanged as lowercase strings.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Declares a string-backed enum with its wire representation.
///
/// Generates `as_str`, `parse`, an `ALL` slice in declaration order, and a
/// `Display` implementation that writes the wire value.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "server", derive(ToSchema))]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Member role shown in the directory.
    Role {
        Founder => "founder",
        Investor => "investor",
        Talent => "talent",
        Enterprise => "enterprise",
        Community => "community",
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Community
    }
}

string_enum! {
    StartupStage {
        Idea => "idea",
        PreSeed => "pre-seed",
        Seed => "seed",
        SeriesA => "series-a",
        SeriesB => "series-b",
        Growth => "growth",
    }
}

impl Default for StartupStage {
    fn default() -> Self {
        StartupStage::Idea
    }
}

string_enum! {
    /// Introduction lifecycle. `Pending` is the only initial state.
    IntroductionStatus {
        Pending => "pending",
        Accepted => "accepted",
        Declined => "declined",
        Completed => "completed",
    }
}

impl IntroductionStatus {
    /// Whether the target of an introduction may move it into this status.
    pub fn is_response(&self) -> bool {
        !matches!(self, IntroductionStatus::Pending)
    }
}

string_enum! {
    RsvpStatus {
        Registered => "registered",
        Waitlist => "waitlist",
        Attended => "attended",
        Cancelled => "cancelled",
    }
}

string_enum! {
    JobType {
        FullTime => "full-time",
        PartTime => "part-time",
        Contract => "contract",
        Internship => "internship",
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::FullTime
    }
}

string_enum! {
    LocationType {
        Remote => "remote",
        Hybrid => "hybrid",
        Onsite => "onsite",
    }
}

impl Default for LocationType {
    fn default() -> Self {
        LocationType::Hybrid
    }
}

string_enum! {
    ForumCategory {
        General => "general",
        Introductions => "introductions",
        Fundraising => "fundraising",
        Hiring => "hiring",
        Product => "product",
        Technical => "technical",
        Events => "events",
        Resources => "resources",
    }
}

impl Default for ForumCategory {
    fn default() -> Self {
        ForumCategory::General
    }
}

string_enum! {
    /// Billing tier.
    Plan {
        Free => "free",
        Premium => "premium",
        Enterprise => "enterprise",
    }
}

impl Plan {
    /// Premium and enterprise plans both unlock premium features.
    pub fn is_premium(&self) -> bool {
        matches!(self, Plan::Premium | Plan::Enterprise)
    }
}

string_enum! {
    SubscriptionStatus {
        Active => "active",
        Canceled => "canceled",
        PastDue => "past_due",
        Trialing => "trialing",
        Incomplete => "incomplete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_values() {
        assert_eq!(StartupStage::parse("series-a"), Some(StartupStage::SeriesA));
        assert_eq!(SubscriptionStatus::parse("past_due"), Some(SubscriptionStatus::PastDue));
        assert_eq!(Role::parse("Founder"), None);
    }

    #[test]
    fn display_matches_serde() {
        for stage in StartupStage::ALL {
            let json = serde_json::to_string(stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage));
        }
    }

    #[test]
    fn only_pending_is_not_a_response() {
        let responses: Vec<_> = IntroductionStatus::ALL
            .iter()
            .filter(|status| status.is_response())
            .collect();

        assert_eq!(responses.len(), 3);
        assert!(!IntroductionStatus::Pending.is_response());
    }
}
