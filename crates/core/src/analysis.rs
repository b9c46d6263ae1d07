use tracing::{debug, info};

use crate::{
    CobbDouglas, Error, InputRange, Inputs, Isoline, Mesh, Model, Normalization, OutputGrid,
    Params, Snapshot, isoline,
};

/// Everything the renderers need, computed once.
///
/// Both figures borrow the same [`Normalization`], so surface colors, floor
/// contours, and the isoquant map stay in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    function: CobbDouglas,
    mesh: Mesh,
    output: OutputGrid,
    normalization: Normalization,
}

impl Analysis {
    /// Builds the ranges and mesh, evaluates the surface, and derives the
    /// shared normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if a range cannot be sampled or if the evaluated
    /// surface is flat.
    pub fn run(params: &Params) -> Result<Self, Error> {
        let [k_start, k_end] = params.capital();
        let [l_start, l_end] = params.labor();

        let capital = InputRange::linspace(k_start, k_end, params.samples())?;
        let labor = InputRange::linspace(l_start, l_end, params.samples())?;
        let mesh = Mesh::new(&labor, &capital);
        debug!(shape = ?mesh.shape(), "built mesh");

        let function = *params.function();
        let output = OutputGrid::evaluate(&function, &mesh);
        let normalization = Normalization::new(&output, params.levels())?;

        info!(
            %function,
            min = normalization.min(),
            max = normalization.max(),
            levels = normalization.levels().len(),
            "evaluated production surface"
        );

        Ok(Self {
            function,
            mesh,
            output,
            normalization,
        })
    }

    #[must_use]
    pub fn function(&self) -> &CobbDouglas {
        &self.function
    }

    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[must_use]
    pub fn output(&self) -> &OutputGrid {
        &self.output
    }

    #[must_use]
    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }

    /// Returns the inputs and output at the lowest and highest grid cells.
    #[must_use]
    pub fn extremes(&self) -> Option<[Snapshot<Inputs, f64>; 2]> {
        let lowest = self.snapshot_at(self.output.argmin()?)?;
        let highest = self.snapshot_at(self.output.argmax()?)?;
        Some([lowest, highest])
    }

    fn snapshot_at(&self, [row, col]: [usize; 2]) -> Option<Snapshot<Inputs, f64>> {
        let inputs = Inputs::new(
            self.mesh.capital_range().get(row)?,
            self.mesh.labor_range().get(col)?,
        );
        self.function.snapshot(inputs).ok()
    }

    /// Traces the isoquants at every interior level boundary.
    #[must_use]
    pub fn isoquants(&self) -> Vec<Isoline> {
        isoline::trace_all(
            &self.output,
            &self.mesh,
            self.normalization.interior_levels(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalizeError;

    #[test]
    fn rejects_overflowing_surface() {
        let function = CobbDouglas::new(1e308, 0.5, 0.5).unwrap();
        let params = Params::default().with_function(function);

        assert!(matches!(
            Analysis::run(&params),
            Err(Error::Normalize(NormalizeError::DegenerateRange { .. }))
        ));
    }

    #[test]
    fn extremes_report_corner_inputs() {
        let params = Params::default().with_samples(20).unwrap();
        let analysis = Analysis::run(&params).unwrap();
        let [low, high] = analysis.extremes().unwrap();

        assert_eq!(low.input, Inputs::new(1.0, 1.0));
        assert_eq!(low.output, 5.0);
        assert_eq!(high.input, Inputs::new(5.0, 10.0));
        assert_eq!(high.output, analysis.normalization().max());
    }

    #[test]
    fn isoquants_skip_boundary_levels() {
        let params = Params::default().with_samples(30).unwrap();
        let analysis = Analysis::run(&params).unwrap();
        let lines = analysis.isoquants();

        assert_eq!(lines.len(), 23);
        assert!(lines.iter().all(|line| !line.is_empty()));
        for (line, level) in lines.iter().zip(analysis.normalization().interior_levels()) {
            assert_eq!(line.level(), *level);
        }
    }
}
