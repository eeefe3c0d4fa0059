pub mod create_property;
pub mod edit_property;
pub mod manage_properties;
pub mod not_found;
pub mod property_detail;
pub mod property_images;

pub use create_property::CreatePropertyPage;
pub use edit_property::EditPropertyPage;
pub use manage_properties::ManagePropertiesPage;
pub use not_found::NotFoundPage;
pub use property_detail::PropertyDetailPage;
pub use property_images::PropertyImagesPage;
