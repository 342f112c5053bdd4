//! Author badges and the list that lays them out.

mod component;

pub use component::{
    AVATAR_SIZE, AuthorBadge, AuthorBadgeProps, AuthorList, AuthorListProps, BadgeView,
    FULL_NAME_LIMIT, ListEntry, PLACEHOLDER_HREF, badge_view, list_entries,
};
