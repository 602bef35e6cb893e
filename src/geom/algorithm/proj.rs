use anyhow::{anyhow, Context, Result};
use geo::{Area, Coord, MapCoords, MultiPolygon};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::config::AREA_PROJ4;
use crate::geom::Geometries;

const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

impl Geometries {
    /// Reproject shapes from lon/lat to the projected CRS given as a PROJ.4 string.
    pub fn reproject(&self, target_proj4: &str) -> Result<Vec<MultiPolygon<f64>>> {
        let from = Proj4::from_proj_string(WGS84_PROJ4)
            .map_err(|e| anyhow!("failed to build source PROJ.4 {WGS84_PROJ4}: {e:?}"))?;

        let to = Proj4::from_proj_string(target_proj4)
            .map_err(|e| anyhow!("failed to build target PROJ.4 {target_proj4}: {e:?}"))?;

        // Map coords → radians in, meters out.
        self.shapes().iter()
            .map(|shape| shape.try_map_coords(|coord: Coord<f64>| -> Result<Coord<f64>> {
                let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
                transform(&from, &to, &mut point)
                    .map_err(|e| anyhow!("CRS transform failed at ({}, {}): {e:?}", coord.x, coord.y))?;
                Ok(Coord { x: point.0, y: point.1 })
            }))
            .collect::<Result<Vec<_>>>()
            .context("[geom::reproject] Failed to reproject shapes")
    }

    /// Area of each shape in square kilometres, measured in UTM zone 43N.
    pub fn areas_sq_km(&self) -> Result<Vec<f64>> {
        Ok(self.reproject(AREA_PROJ4)?.iter()
            .map(|shape| shape.unsigned_area() / 1_000_000.0)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;

    #[test]
    fn tenth_degree_square_near_kochi() {
        // 0.1° x 0.1° at 10°N: ~11.06 km of latitude by ~10.96 km of longitude.
        let square = MultiPolygon(vec![polygon![
            (x: 76.2, y: 10.0), (x: 76.3, y: 10.0), (x: 76.3, y: 10.1), (x: 76.2, y: 10.1),
        ]]);
        let areas = Geometries::new(vec![square]).areas_sq_km().unwrap();
        assert_eq!(areas.len(), 1);
        assert!((areas[0] - 121.2).abs() < 2.0, "area was {}", areas[0]);
    }
}
