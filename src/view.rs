use async_graphql::Enum;

/// Pages of the dashboard, in navigation order.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum View {
    Overview,
    DataHub,
    AdMatrix,
    Advisor,
}

impl View {
    pub(crate) const ALL: [Self; 4] = [Self::Overview, Self::DataHub, Self::AdMatrix, Self::Advisor];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::DataHub => "DATA HUB",
            Self::AdMatrix => "AD MATRIX",
            Self::Advisor => "ADVISOR AI",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Overview => "fa-chart-pie",
            Self::DataHub => "fa-database",
            Self::AdMatrix => "fa-layer-group",
            Self::Advisor => "fa-magic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::View;

    #[test]
    fn overview_comes_first() {
        assert_eq!(View::ALL[0], View::Overview);
        assert_eq!(View::ALL[0].label(), "OVERVIEW");
        assert_eq!(View::Advisor.icon(), "fa-magic");
    }
}
