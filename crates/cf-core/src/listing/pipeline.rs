//! Filter, priority sort and pagination of campaign lists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::campaign::{is_flagged, CampaignSummary, DerivedStatus, StatusView};

/// Status selector offered by the list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Successful,
    Failed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Successful => "successful",
            Self::Failed => "failed",
        }
    }

    pub fn accepts(&self, status: DerivedStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == DerivedStatus::Active,
            Self::Successful => status == DerivedStatus::Successful,
            Self::Failed => status == DerivedStatus::Failed,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

/// A campaign together with its current derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedCampaign {
    pub summary: CampaignSummary,
    pub status: StatusView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub status_filter: StatusFilter,
    /// Sort flagged campaigns ahead of the others.
    pub prioritize_flagged: bool,
}

/// Which part of the sorted list to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// 1-based page of fixed size. Page 0 is treated as page 1.
    Page { number: usize, size: usize },
    /// Incremental reveal: the first `visible` items.
    Reveal { visible: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage<T = ListedCampaign> {
    pub items: Vec<T>,
    /// Items left after filtering, before windowing.
    pub total_matching: usize,
    /// Page count for `Window::Page`; 1 for a non-empty reveal window.
    pub total_pages: usize,
    pub has_more: bool,
}

/// Run the pipeline. The input slice is left untouched.
///
/// Order: newest `creation_time` first (unknown creation time last); when
/// flagged campaigns are prioritized they are moved ahead by a stable
/// partition, so each group keeps that order.
pub fn apply(campaigns: &[ListedCampaign], query: &ListingQuery, window: Window) -> ListingPage {
    let mut matching: Vec<ListedCampaign> = campaigns
        .iter()
        .filter(|c| match c.status.resolved() {
            Some(status) => query.status_filter.accepts(status),
            None => false,
        })
        .cloned()
        .collect();

    matching.sort_by(|a, b| b.summary.creation_time.cmp(&a.summary.creation_time));

    if query.prioritize_flagged {
        let (flagged, rest): (Vec<_>, Vec<_>) = matching
            .into_iter()
            .partition(|c| is_flagged(&c.summary.name));
        matching = flagged;
        matching.extend(rest);
    }

    window_items(matching, window)
}

/// Cut one window out of an already ordered list.
pub fn window_items<T>(ordered: Vec<T>, window: Window) -> ListingPage<T> {
    let total_matching = ordered.len();

    match window {
        Window::Page { number, size } => {
            let size = size.max(1);
            let number = number.max(1);
            let total_pages = total_matching.div_ceil(size);
            let start = (number - 1).saturating_mul(size);
            let items: Vec<T> = ordered.into_iter().skip(start).take(size).collect();
            ListingPage {
                items,
                total_matching,
                total_pages,
                has_more: number < total_pages,
            }
        }
        Window::Reveal { visible } => {
            let items: Vec<T> = ordered.into_iter().take(visible).collect();
            ListingPage {
                items,
                total_matching,
                total_pages: usize::from(total_matching > 0),
                has_more: visible < total_matching,
            }
        }
    }
}
