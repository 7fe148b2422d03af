use crate::error::SiteError;
use strum::{EnumIter, IntoEnumIterator as _};

/// The procedural buildings the 3D viewer can show.
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, PartialEq)]
pub enum BuildingModel {
    #[default]
    Office,
    Villa,
    Cultural,
}

impl BuildingModel {
    pub fn all() -> impl Iterator<Item = BuildingModel> {
        BuildingModel::iter()
    }

    /// The viewer's `modelIndex`.
    pub const fn index(self) -> usize {
        match self {
            BuildingModel::Office => 0,
            BuildingModel::Villa => 1,
            BuildingModel::Cultural => 2,
        }
    }

    pub const fn name_key(self) -> &'static str {
        match self {
            BuildingModel::Office => "model.office",
            BuildingModel::Villa => "model.villa",
            BuildingModel::Cultural => "model.cultural",
        }
    }

    pub const fn description_key(self) -> &'static str {
        match self {
            BuildingModel::Office => "model.office.description",
            BuildingModel::Villa => "model.villa.description",
            BuildingModel::Cultural => "model.cultural.description",
        }
    }
}

impl TryFrom<usize> for BuildingModel {
    type Error = SiteError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        BuildingModel::all()
            .find(|model| model.index() == index)
            .ok_or(SiteError::UnknownModel(index))
    }
}

/// Selection and loading state of the model viewer.
///
/// The scene itself is rendered elsewhere; it reports back through
/// [`ModelViewer::loaded`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModelViewer {
    selected: BuildingModel,
    loading: bool,
}

impl Default for ModelViewer {
    fn default() -> Self {
        Self {
            selected: BuildingModel::default(),
            loading: true,
        }
    }
}

impl ModelViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> BuildingModel {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Shows another model. Reselecting the current one does nothing.
    pub fn select(&mut self, model: BuildingModel) {
        if model != self.selected {
            tracing::debug!("Switching model viewer to {:?}", model);
            self.selected = model;
            self.loading = true;
        }
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), SiteError> {
        self.select(BuildingModel::try_from(index)?);
        Ok(())
    }

    pub fn loaded(&mut self) {
        self.loading = false;
    }

    pub const fn loading_key(&self) -> &'static str {
        "model.loading"
    }
}
