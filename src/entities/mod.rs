//! Gym record types

pub mod gym_info;
pub mod member;
pub mod payment;
pub mod plan;

pub use gym_info::{GymInfo, GymInfoDraft};
pub use member::{Member, MemberDraft, PlanType};
pub use payment::{Payment, PaymentDraft, PaymentMethod};
pub use plan::{Plan, PlanDraft};
