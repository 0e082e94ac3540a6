//! Request types for updating models.

use super::{ImageryTask, PackageStatus, ResponsePackage};

/// Partial update of a response package; `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponsePackageUpdate {
    pub press_release: Option<String>,
    pub social_posts: Option<String>,
    pub imagery_tasks: Option<Vec<ImageryTask>>,
    pub status: Option<PackageStatus>,
}

impl ResponsePackageUpdate {
    /// Update that only changes the status.
    pub fn status(status: PackageStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.press_release.is_none()
            && self.social_posts.is_none()
            && self.imagery_tasks.is_none()
            && self.status.is_none()
    }

    /// Apply the given fields to `package`, returning a description of each
    /// field that was written.
    pub fn apply_to(self, package: &mut ResponsePackage) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(press_release) = self.press_release {
            package.press_release = press_release;
            changes.push("Updated press release".to_string());
        }
        if let Some(social_posts) = self.social_posts {
            package.social_posts = social_posts;
            changes.push("Updated social posts".to_string());
        }
        if let Some(tasks) = self.imagery_tasks {
            package.set_imagery_tasks(tasks);
            changes.push(format!(
                "Set imagery tasking to {} task(s)",
                package.imagery_tasks.len()
            ));
        }
        if let Some(status) = self.status {
            package.status = status;
            changes.push(format!("Changed status to {}", status.as_str()));
        }

        changes
    }
}

impl TryFrom<crate::params::UpdateResponsePackage> for ResponsePackageUpdate {
    type Error = crate::PlaybookError;

    /// Convert loosely typed parameters into a validated update.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::InvalidInput` - When the status is not a known status
    /// * `PlaybookError::InvalidInput` - When an imagery task is not one of the
    ///   fixed options
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrative_core::{
    ///     models::{PackageStatus, ResponsePackageUpdate},
    ///     params::UpdateResponsePackage,
    /// };
    ///
    /// let params = UpdateResponsePackage {
    ///     id: "narr_1".to_string(),
    ///     status: Some("for review".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let update: ResponsePackageUpdate = params.try_into()?;
    /// assert_eq!(update.status, Some(PackageStatus::ForReview));
    /// # Ok::<(), narrative_core::PlaybookError>(())
    /// ```
    fn try_from(params: crate::params::UpdateResponsePackage) -> Result<Self, Self::Error> {
        let (status, imagery_tasks) = params.validate()?;

        Ok(Self {
            press_release: params.press_release,
            social_posts: params.social_posts,
            imagery_tasks,
            status,
        })
    }
}
