use crate::dashboard::DashboardState;

impl DashboardState {
    pub(super) fn update_odor_level(&mut self, payload: &str) {
        self.odor_level.replace(payload);
    }
}
