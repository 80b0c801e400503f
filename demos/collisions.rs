//! Index a batch of tag readings by tag name, where several readings share
//! one name, then look them up by hash code and by value.
use hash_array::{HashArray, HashCode};

#[derive(Clone, Debug, PartialEq)]
struct Reading {
    tag: &'static str,
    value: f64,
}

impl HashCode for Reading {
    fn hash_code(&self) -> i32 {
        self.tag.hash_code()
    }
}

fn reading(tag: &'static str, value: f64) -> Reading {
    Reading { tag, value }
}

fn main() {
    let mut array = HashArray::with_capacity(2);

    for r in [
        reading("pressure", 1.2),
        reading("temperature", 21.5),
        reading("pressure", 1.3),
        reading("flow", 0.4),
        reading("temperature", 21.7),
    ] {
        array.add(r);
    }
    println!("capacity {} after {} readings", array.capacity(), array.len());

    for (r, hash) in array.iter().zip(array.hash_codes()) {
        println!("{hash:>12} {:<12} {}", r.tag, r.value);
    }

    let pressure = "pressure".hash_code();
    println!("pressure readings: {:?}", array.items(pressure));
    println!("first pressure: {:?}", array.get_item(pressure));

    // keep only the latest pressure reading
    let removed = array.store_item(reading("pressure", 1.4));
    println!("store_item removed {removed}, pressure now {:?}", array.items(pressure));

    let target = reading("temperature", 21.7);
    match array.position(&target) {
        Some(idx) => println!("{target:?} is at {idx}"),
        None => println!("{target:?} is missing"),
    }

    let removed = array.remove_all("temperature".hash_code());
    println!("removed {removed} temperature readings, {} left", array.len());

    if let Err(e) = array.set(0, reading("not-the-same-tag", 0.0)) {
        println!("rejected positional write: {e}");
    }
}
