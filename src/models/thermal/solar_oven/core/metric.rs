closed_set! {
    /// Scalar performance output reported for each cell of a surface.
    pub enum Metric in "metric" {
        /// Predicted interior oven temperature, in degrees Celsius.
        Tio => "Interior temperature",
        /// Total material cost, in dollars.
        Cost => "Cost",
        /// Interior temperature rise over ambient per dollar spent, K/$.
        PerformanceIndex => "Performance index",
        /// Design score (lower is better): distance from the goal temperature
        /// plus weighted cost.
        Score => "Score",
    }
}
