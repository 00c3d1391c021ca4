//! Local project store - saved, named signature lists

pub mod db;

pub use db::{PROJECTS_DB_FILE, Project, ProjectStore};
