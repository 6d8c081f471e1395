#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod column;
mod constraint;
mod factory;
mod join_condition;
mod name;
mod operand;
mod operator;
mod ordering;
mod query;
mod source;

pub use column::Column;
pub use constraint::Constraint;
pub use factory::QomFactory;
pub use factory::QueryObjectModelFactory;
pub use join_condition::JoinCondition;
pub use operand::DynamicOperand;
pub use operand::StaticOperand;
pub use operator::Operator;
pub use ordering::Order;
pub use ordering::Ordering;
pub use query::Query;
pub use source::JoinType;
pub use source::Source;
