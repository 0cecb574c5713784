mod point_in_time;

pub use point_in_time::PointInTime;
