use crate::config::AuxiliaryFields;

/// One row of the wind profile table.
///
/// `wind_speed` is the time-varying horizontal speed. The vertical wind
/// speed column lives in `aux.vertical_speed` and stays constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub wind_speed: f64,
    pub aux: AuxiliaryFields,
}

impl Sample {
    pub fn columns(&self) -> [f64; 8] {
        let aux = &self.aux;
        [
            self.time,
            self.wind_speed,
            aux.direction,
            aux.vertical_speed,
            aux.horizontal_shear,
            aux.vertical_shear,
            aux.linear_vertical_shear,
            aux.gust_speed,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_order() {
        let sample = Sample {
            time: 1.5,
            wind_speed: 7.0,
            aux: AuxiliaryFields {
                direction: 1.0,
                vertical_speed: 2.0,
                horizontal_shear: 3.0,
                vertical_shear: 4.0,
                linear_vertical_shear: 5.0,
                gust_speed: 6.0,
            },
        };
        assert_eq!(sample.columns(), [1.5, 7.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
