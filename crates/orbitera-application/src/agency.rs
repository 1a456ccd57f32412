//! Static agency contact details shown beside the contact form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgencyInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub response_time: &'static str,
}

pub const AGENCY_INFO: AgencyInfo = AgencyInfo {
    email: "hello@orbitera.io",
    location: "Bangalore, India",
    response_time: "Within 24 hours",
};

impl AgencyInfo {
    /// `(label, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Email", self.email),
            ("Location", self.location),
            ("Response Time", self.response_time),
        ]
    }
}
