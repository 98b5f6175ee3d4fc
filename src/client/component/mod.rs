pub mod header;
pub mod layout;
pub mod loading_overlay;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod toast;

pub use header::Header;
pub use layout::Layout;
pub use loading_overlay::LoadingOverlay;
pub use modal::{ConfirmationModal, Modal};
pub use page::{EmptyState, Page, Section};
pub use pagination::{Pagination, PaginationData};
pub use toast::Toast;
