pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod symbol;

pub use comp::Comp;
pub use dest::Dest;
pub use inst::Inst;
pub use jump::Jump;
