quantity!(
    /// Cost in Norwegian kroner. Kept unrounded, whole-krone rounding is
    /// a rendering concern.
    Kroner, suffix: "kr", precision: 2
);
