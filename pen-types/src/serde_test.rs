//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    let commands = vec![
        PointPenCommand::BeginPath {
            identifier: Some("contour0".into()),
        },
        PointPenCommand::AddPoint(
            ContourPoint::new(100.0, 100.0, PointType::Line)
                .with_name("start")
                .with_attribute("com.example.flag", "1"),
        ),
        PointPenCommand::AddPoint(ContourPoint::new(634.0, 800.0, PointType::OffCurve)),
        PointPenCommand::AddPoint(ContourPoint::new(100.0, 800.0, PointType::QCurve).with_smooth(true)),
        PointPenCommand::EndPath,
        PointPenCommand::AddComponent {
            base: "a".into(),
            transform: Affine::new([1.0, 0.0, 0.0, 1.0, 20.0, -5.0]),
            identifier: None,
        },
    ];

    let dumped = serde_json::to_string(&commands).unwrap();
    let loaded: Vec<PointPenCommand> = serde_json::from_str(&dumped).unwrap();
    assert_eq!(commands, loaded);

    let typ = serde_json::to_string(&PointType::QCurve).unwrap();
    assert_eq!(typ, "\"qcurve\"");
}

#[test]
fn test_serde_segments() {
    let commands = vec![
        PenCommand::MoveTo { x: 1.0, y: 2.0 },
        PenCommand::CurveTo {
            cx0: 3.0,
            cy0: 4.0,
            cx1: 5.0,
            cy1: 6.0,
            x: 7.0,
            y: 8.0,
        },
        PenCommand::Close,
    ];
    let dumped = serde_json::to_string(&commands).unwrap();
    let loaded: Vec<PenCommand> = serde_json::from_str(&dumped).unwrap();
    assert_eq!(commands, loaded);
}
