use std::io::{self, Write};

use crate::sim::Sample;

/// Write one body's track as CSV.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          eccentricity, inclination_deg, ascending_node_deg,
///          argument_of_perihelion_deg, semimajor_axis
/// Units: s, AU, AU/s, degrees.
pub fn write_samples<W: Write>(writer: &mut W, track: &[Sample]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,\
         eccentricity,inclination_deg,ascending_node_deg,argument_of_perihelion_deg,semimajor_axis"
    )?;

    for s in track {
        let e = &s.elements;
        writeln!(
            writer,
            "{:.1},{:.9},{:.9},{:.9},{:.6e},{:.6e},{:.6e},\
             {:.6},{:.4},{:.4},{:.4},{:.6}",
            s.time,
            s.position.x, s.position.y, s.position.z,
            s.velocity.x, s.velocity.y, s.velocity.z,
            e.eccentricity,
            e.inclination.to_degrees(),
            e.ascending_node.to_degrees(),
            e.argument_of_perihelion.to_degrees(),
            e.semimajor_axis,
        )?;
    }

    Ok(())
}

/// Write a track to a CSV file at the given path.
pub fn write_samples_file(path: &str, track: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_samples(&mut file, track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::OrbitalElements;
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let elements = OrbitalElements::from_degrees(0.1, 10.0, 20.0, 30.0, 1.5).unwrap();
        let track = vec![
            Sample {
                time: 0.0,
                position: Vector3::new(1.0, 0.0, 0.0),
                velocity: Vector3::new(0.0, 2e-7, 0.0),
                elements,
            },
            Sample {
                time: 16_666.7,
                position: Vector3::new(0.99, 0.003, 0.0),
                velocity: Vector3::new(-6e-10, 2e-7, 0.0),
                elements,
            },
        ];

        let mut buf = Vec::new();
        write_samples(&mut buf, &track).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0,1.000000000,"));
        assert!(lines[1].ends_with(",10.0000,20.0000,30.0000,1.500000"));
        assert_eq!(lines[2].split(',').count(), 12);
    }
}
