use linear_collections_core_rs::stack::{Stack, StackError};
use proptest::prelude::*;

fn lifo_roundtrip<T: Clone + PartialEq + core::fmt::Debug>(elements: &[T]) {
  let mut stack = Stack::new();
  for element in elements {
    stack.push(element.clone());
  }
  assert_eq!(stack.as_slice(), elements);
  assert_eq!(stack.is_empty(), elements.is_empty());

  for expected in elements.iter().rev() {
    assert_eq!(stack.pop().as_ref(), Ok(expected));
  }
  assert!(stack.is_empty());
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

fn prefixes<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
  (0..=values.len()).map(|n| values[..n].to_vec()).collect()
}

#[test]
fn lifo_holds_for_every_element_type() {
  for case in prefixes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]) {
    lifo_roundtrip::<i32>(&case);
  }
  for case in prefixes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]) {
    lifo_roundtrip::<f64>(&case);
  }
  let letters: Vec<String> = ('a'..='g').map(String::from).collect();
  for case in prefixes(&letters) {
    lifo_roundtrip::<String>(&case);
  }
  for case in prefixes(b"abcdefg") {
    lifo_roundtrip::<u8>(&case);
  }
}

#[test]
fn integer_scenario() {
  let mut stack = Stack::new();
  stack.push(1);
  stack.push(2);
  stack.push(3);

  assert_eq!(stack.pop(), Ok(3));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

proptest! {
  #[test]
  fn pop_order_reverses_push_order(elements in prop::collection::vec(-1.0e6f64..1.0e6, 0..64)) {
    let mut stack = Stack::new();
    for element in &elements {
      stack.push(*element);
    }
    let mut drained = Vec::with_capacity(elements.len());
    while let Ok(element) = stack.pop() {
      drained.push(element);
    }
    drained.reverse();
    prop_assert_eq!(drained, elements);
    prop_assert_eq!(stack.pop(), Err(StackError::Empty));
  }

  #[test]
  fn is_empty_tracks_net_pushes(ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..128)) {
    let mut stack = Stack::new();
    let mut model = Vec::new();
    for op in ops {
      match op {
        | Some(value) => {
          stack.push(value);
          model.push(value);
        },
        | None => {
          prop_assert_eq!(stack.pop().ok(), model.pop());
        },
      }
      prop_assert_eq!(stack.is_empty(), model.is_empty());
      prop_assert_eq!(stack.len(), model.len());
      prop_assert_eq!(stack.peek().ok(), model.last());
    }
  }
}
