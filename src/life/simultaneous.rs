use crate::{Cell, Pond, Processor, Result, Rule};

/// Updates every cell from the same snapshot of the previous generation.
///
/// Neighbor counts of the whole pond are taken first and only then the new
/// states are written, so no cell sees a neighbor's next state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simultaneous;

impl Processor for Simultaneous {
    fn apply(&self, pond: &mut Pond, rule: &dyn Rule) -> Result<()> {
        let dims = pond.dimensions();
        let mut next = Vec::with_capacity(dims.area());
        for location in dims.locations() {
            let (neibs, _) = pond.count_live_neighbors(location);
            let alive = rule.next_state(neibs, pond.is_alive(location));
            next.push((location, if alive { Cell::Alive(neibs) } else { Cell::Dead }));
        }

        for (location, cell) in next {
            pond.set_cell(location, cell)?;
        }
        Ok(())
    }
}
