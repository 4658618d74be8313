mod order;
mod proposal;
mod quota;
mod rate;
mod tier;

pub use order::*;
pub use proposal::*;
pub use quota::*;
pub use rate::*;
pub use tier::*;
