pub mod confirmation_modal;
pub mod overflow_menu;
pub mod property_form;
pub mod property_management_item;
pub mod toast;

pub use confirmation_modal::ConfirmationModal;
pub use overflow_menu::{MenuItem, OverflowMenu};
pub use property_form::PropertyForm;
pub use property_management_item::PropertyManagementItem;
pub use toast::ToastContainer;
