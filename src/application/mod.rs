pub mod get_flip_url;
pub mod list_catalogue_videos;
pub mod list_catalogues;
