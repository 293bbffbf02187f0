use seabattle::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // the standard 6x6 board fits in a u64
    assert!(BitBoard::<u64, 6>::try_new().is_ok());

    let err = BitBoard::<u32, 6>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 6, capacity: 32 })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u64, 6>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(6, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 6, col: 0 }
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u64, 6>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_not_stays_on_board() {
    let full = !BitBoard::<u64, 6>::new();
    assert_eq!(full.count_ones(), 36);
    assert!(full.is_full());
}

#[test]
fn test_dilate_clips_at_edges() {
    let corner = BitBoard::<u64, 6>::from_cells([(0, 0)]).unwrap();
    assert_eq!(corner.dilate().count_ones(), 4);

    let centre = BitBoard::<u64, 6>::from_cells([(2, 2)]).unwrap();
    let grown = centre.dilate();
    assert_eq!(grown.count_ones(), 9);
    assert!(grown.get(1, 1).unwrap());
    assert!(grown.get(3, 3).unwrap());
    assert!(!grown.get(4, 2).unwrap());

    // a horizontal three-cell body in the top row
    let body = BitBoard::<u64, 6>::from_cells([(0, 0), (0, 1), (0, 2)]).unwrap();
    assert_eq!((body.dilate() & !body).count_ones(), 5);
}
