//! Members Module
//!
//! Member records and their loan sets.
//!
//! A member's loan set holds each borrowed book id at most once, in the
//! order the loans were opened. Its length never exceeds
//! `MAX_LOANS_PER_MEMBER`.

mod member;

pub use member::{Member, MemberUpdate};
