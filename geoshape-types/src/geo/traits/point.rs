use num_traits::{Float, FloatConst, NumCast, One};

/// Point on the surface of a celestial body, given by its longitude and latitude.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float + FloatConst;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Bearing of the rhumb line (loxodrome) from this point to the `other` one, in degrees clockwise from north,
    /// in the range `(-180, 180]`.
    ///
    /// Unlike the great-circle bearing, the heading along a rhumb line stays constant. The computation uses the
    /// spherical model.
    fn rhumb_bearing(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        let pi = Self::Num::PI();
        let two = Self::Num::one() + Self::Num::one();

        let phi1 = self.lat_rad();
        let phi2 = other.lat_rad();
        let mut delta_lambda = other.lon_rad() - self.lon_rad();

        if delta_lambda > pi {
            delta_lambda = delta_lambda - two * pi;
        }
        if delta_lambda < -pi {
            delta_lambda = delta_lambda + two * pi;
        }

        let delta_psi = ((phi2 / two + Self::Num::FRAC_PI_4()).tan()
            / (phi1 / two + Self::Num::FRAC_PI_4()).tan())
        .ln();

        let full_circle = <Self::Num as NumCast>::from(360.0).unwrap_or_else(Self::Num::nan);
        let half_circle = full_circle / two;

        let bearing = (delta_lambda.atan2(delta_psi).to_degrees() + full_circle) % full_circle;
        if bearing > half_circle {
            bearing - full_circle
        } else {
            bearing
        }
    }
}

/// Geographic point type that can be constructed from longitude and latitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
