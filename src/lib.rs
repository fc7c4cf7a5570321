mod abi;
mod batch;
mod eligibility;
pub mod env;
mod gather;
mod json_codecs;
pub mod log;
mod node_list_store;
mod platform_node;
mod units;

pub use abi::encode_status_tuple;
pub use abi::encode_string_array;
pub use batch::read_batch;
pub use batch::InvalidOffsetError;
pub use eligibility::eligible_node_ids;
pub use eligibility::FilterParams;
pub use eligibility::InvalidParamsError;
pub use eligibility::MAX_DELEGATION_FEE_BASIS_POINTS;
pub use gather::gather_node_list;
pub use node_list_store::NodeListStore;
pub use node_list_store::StoreUnreadableError;
pub use platform_node::Delegator;
pub use platform_node::PlatformNode;
pub use platform_node::PlatformNodeHttp;
pub use platform_node::Validator;
pub use units::NavaxNewtype;
pub use units::WeiNewtype;
pub use units::WEI_PER_NAVAX;
