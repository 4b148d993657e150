pub mod demographics;
pub mod export;
pub mod norms;
pub mod response;
pub mod results;
pub mod session;
pub mod share;
pub mod storage;
