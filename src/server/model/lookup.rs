//! Lookup labels for bug status, severity, and app.

use crate::model::bug::{AppDto, CreateAppDto, LookupsDto};

/// Label sets accepted by bug creation and editing.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookups {
    pub statuses: Vec<String>,
    pub severities: Vec<String>,
    pub apps: Vec<App>,
}

impl Lookups {
    pub fn into_dto(self) -> LookupsDto {
        LookupsDto {
            statuses: self.statuses,
            severities: self.severities,
            apps: self.apps.into_iter().map(App::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub id: i32,
    pub app_name: String,
}

impl App {
    pub fn into_dto(self) -> AppDto {
        AppDto {
            id: self.id,
            app_name: self.app_name,
        }
    }

    pub fn from_entity(entity: entity::app::Model) -> Self {
        Self {
            id: entity.id,
            app_name: entity.app_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAppParams {
    pub app_name: String,
}

impl CreateAppParams {
    pub fn from_dto(dto: CreateAppDto) -> Self {
        Self {
            app_name: dto.app_name.trim().to_string(),
        }
    }
}
