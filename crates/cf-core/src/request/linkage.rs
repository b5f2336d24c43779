//! Locating the campaign deployed for an approved request.
//!
//! The factory call does not always report the new address. When it does
//! not, the freshly refetched campaign list is searched for entries owned by
//! the creator under the requested name. A hit only counts when it was
//! created inside a time window around the approval; several hits are
//! narrowed to the newest one inside it.

use tracing::warn;

use super::model::CampaignRequest;
use crate::campaign::CampaignSummary;
use crate::errors::InconsistencyError;
use crate::ids::CampaignAddress;

pub const DEFAULT_CREATION_WINDOW_SECS: u64 = 600;

/// Result of the linkage step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Linkage {
    Linked(CampaignAddress),
    /// Stored as an empty address, needs manual reconciliation.
    Unlinked(InconsistencyError),
}

impl Linkage {
    pub fn address(&self) -> CampaignAddress {
        match self {
            Self::Linked(address) => address.clone(),
            Self::Unlinked(_) => CampaignAddress::unlinked(),
        }
    }

    pub fn warning(&self) -> Option<&InconsistencyError> {
        match self {
            Self::Linked(_) => None,
            Self::Unlinked(err) => Some(err),
        }
    }
}

/// Bounds for matching by creation time, unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationWindow {
    pub not_before: u64,
    pub not_after: u64,
}

impl CreationWindow {
    /// From the request submission (ms) up to `now_secs`, widened by `slack_secs`.
    pub fn around(request: &CampaignRequest, now_secs: u64, slack_secs: u64) -> Self {
        let submitted_secs = u64::try_from(request.created_at / 1000).unwrap_or(0);
        Self {
            not_before: submitted_secs.saturating_sub(slack_secs),
            not_after: now_secs.saturating_add(slack_secs),
        }
    }

    pub fn contains(&self, creation_time: u64) -> bool {
        (self.not_before..=self.not_after).contains(&creation_time)
    }
}

/// Resolve the address to record for an approved request.
pub fn resolve_linkage(
    reported: Option<&CampaignAddress>,
    candidates: &[CampaignSummary],
    request: &CampaignRequest,
    window: CreationWindow,
) -> Linkage {
    if let Some(address) = reported.filter(|a| !a.is_empty()) {
        return Linkage::Linked(address.clone());
    }

    let matches: Vec<&CampaignSummary> = candidates
        .iter()
        .filter(|c| c.owner.matches(&request.creator) && c.name == request.name)
        .collect();

    match matches.as_slice() {
        [] => unlinked(InconsistencyError::NoMatch {
            owner: request.creator.clone(),
            name: request.name.clone(),
        }),
        [single] if single.creation_time.map_or(true, |t| window.contains(t)) => {
            Linkage::Linked(single.campaign_address.clone())
        }
        [_] => unlinked(InconsistencyError::NoMatch {
            owner: request.creator.clone(),
            name: request.name.clone(),
        }),
        several => {
            let in_window: Vec<&CampaignSummary> = several
                .iter()
                .copied()
                .filter(|c| c.creation_time.is_some_and(|t| window.contains(t)))
                .collect();
            let newest = in_window.iter().filter_map(|c| c.creation_time).max();
            let at_newest: Vec<&CampaignSummary> = in_window
                .iter()
                .copied()
                .filter(|c| newest.is_some() && c.creation_time == newest)
                .collect();
            match at_newest.as_slice() {
                [single] => Linkage::Linked(single.campaign_address.clone()),
                _ => unlinked(InconsistencyError::Ambiguous {
                    owner: request.creator.clone(),
                    name: request.name.clone(),
                    count: if at_newest.is_empty() {
                        several.len()
                    } else {
                        at_newest.len()
                    },
                }),
            }
        }
    }
}

fn unlinked(err: InconsistencyError) -> Linkage {
    warn!(error = %err, "deployed campaign could not be linked to its request");
    Linkage::Unlinked(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CampaignRequestDraft;

    fn request() -> CampaignRequest {
        CampaignRequest::pending(
            "req-1".into(),
            CampaignRequestDraft {
                creator: "0xAA".into(),
                name: "Medical Fund".to_string(),
                description: "desc".to_string(),
                goal: 1000,
                deadline_days: 30,
                id_image_url: String::new(),
                cover_image_url: String::new(),
                full_name: "Jane".to_string(),
                age: 40,
                is_emergency: false,
                created_at: 1_000_000,
            },
        )
    }

    fn summary(address: &str, owner: &str, name: &str, created: u64) -> CampaignSummary {
        CampaignSummary {
            campaign_address: address.into(),
            owner: owner.into(),
            name: name.to_string(),
            creation_time: Some(created),
        }
    }

    fn window() -> CreationWindow {
        CreationWindow::around(&request(), 2_000, 60)
    }

    #[test]
    fn reported_address_wins() {
        let reported = CampaignAddress::from("0xDD");
        let linkage = resolve_linkage(Some(&reported), &[], &request(), window());
        assert_eq!(linkage, Linkage::Linked("0xDD".into()));
    }

    #[test]
    fn single_owner_and_name_match_links() {
        let candidates = vec![
            summary("0xBB", "0xAA", "Other", 1_500),
            summary("0xCC", "0xaa", "Medical Fund", 1_500),
        ];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage, Linkage::Linked("0xCC".into()));
        assert_eq!(linkage.warning(), None);
    }

    #[test]
    fn no_match_yields_empty_linkage() {
        let candidates = vec![summary("0xBB", "0xEE", "Medical Fund", 1_500)];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage.address(), CampaignAddress::unlinked());
        assert!(matches!(
            linkage.warning(),
            Some(InconsistencyError::NoMatch { .. })
        ));
    }

    #[test]
    fn duplicates_are_narrowed_by_creation_window() {
        let candidates = vec![
            summary("0xOLD", "0xAA", "Medical Fund", 10),
            summary("0xNEW", "0xAA", "Medical Fund", 1_900),
        ];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage, Linkage::Linked("0xNEW".into()));
    }

    #[test]
    fn newest_duplicate_inside_window_wins() {
        let candidates = vec![
            summary("0x1", "0xAA", "Medical Fund", 1_100),
            summary("0x2", "0xAA", "Medical Fund", 1_900),
        ];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage, Linkage::Linked("0x2".into()));
    }

    #[test]
    fn duplicates_created_in_the_same_second_stay_ambiguous() {
        let candidates = vec![
            summary("0x1", "0xAA", "Medical Fund", 1_900),
            summary("0x2", "0xAA", "Medical Fund", 1_900),
        ];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage.address(), CampaignAddress::unlinked());
        assert!(matches!(
            linkage.warning(),
            Some(InconsistencyError::Ambiguous { count: 2, .. })
        ));
    }

    #[test]
    fn duplicates_outside_window_stay_ambiguous() {
        let candidates = vec![
            summary("0x1", "0xAA", "Medical Fund", 10),
            summary("0x2", "0xAA", "Medical Fund", 20),
        ];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert!(matches!(
            linkage.warning(),
            Some(InconsistencyError::Ambiguous { count: 2, .. })
        ));
    }

    #[test]
    fn single_match_outside_window_is_no_match() {
        let candidates = vec![summary("0xOLD", "0xAA", "Medical Fund", 10)];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage.address(), CampaignAddress::unlinked());
        assert!(matches!(
            linkage.warning(),
            Some(InconsistencyError::NoMatch { .. })
        ));
    }

    #[test]
    fn single_match_without_creation_time_links() {
        let candidates = vec![CampaignSummary {
            creation_time: None,
            ..summary("0xCC", "0xAA", "Medical Fund", 0)
        }];
        let linkage = resolve_linkage(None, &candidates, &request(), window());
        assert_eq!(linkage, Linkage::Linked("0xCC".into()));
    }
}
