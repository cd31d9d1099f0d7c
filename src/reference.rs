//! Cheat sheet for the standard collections and their operation costs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerNote {
    pub name: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityNote {
    pub category: &'static str,
    pub operation: &'static str,
    pub cost: &'static str,
}

pub fn container_notes() -> &'static [ContainerNote] {
    const NOTES: &[ContainerNote] = &[
        ContainerNote {
            name: "Vec<T>",
            summary: "Growable array; fast push/pop at the end, slow middle ops; ordered.",
        },
        ContainerNote {
            name: "VecDeque<T>",
            summary: "Ring buffer; O(1) push/pop at both ends; backs sliding windows.",
        },
        ContainerNote {
            name: "HashMap<K, V>",
            summary: "Hash map; O(1) average get/insert; iteration order unspecified.",
        },
        ContainerNote {
            name: "HashSet<T>",
            summary: "Hash set; unique items; O(1) average membership.",
        },
        ContainerNote {
            name: "BTreeMap<K, V>",
            summary: "Ordered map; O(log n) operations; sorted iteration and ranges.",
        },
        ContainerNote {
            name: "BinaryHeap<T>",
            summary: "Max-heap; O(log n) push/pop; wrap in Reverse for a min-heap.",
        },
        ContainerNote {
            name: "(A, B, ..)",
            summary: "Fixed-size tuple; hashable and ordered when its fields are.",
        },
    ];
    NOTES
}

pub fn big_o_notes() -> &'static [ComplexityNote] {
    const NOTES: &[ComplexityNote] = &[
        ComplexityNote {
            category: "Access",
            operation: "vec[i]",
            cost: "O(1)",
        },
        ComplexityNote {
            category: "Access",
            operation: "map.get(&key)",
            cost: "O(1) avg",
        },
        ComplexityNote {
            category: "Access",
            operation: "set.contains(&x)",
            cost: "O(1) avg",
        },
        ComplexityNote {
            category: "Access",
            operation: "vec.contains(&x)",
            cost: "O(n)",
        },
        ComplexityNote {
            category: "Insert/Delete",
            operation: "vec.push / vec.pop",
            cost: "O(1) amortized",
        },
        ComplexityNote {
            category: "Insert/Delete",
            operation: "vec.insert(0, x) / vec.remove(i)",
            cost: "O(n)",
        },
        ComplexityNote {
            category: "Insert/Delete",
            operation: "map/set insert or remove",
            cost: "O(1) avg",
        },
        ComplexityNote {
            category: "Insert/Delete",
            operation: "deque push/pop either end",
            cost: "O(1)",
        },
        ComplexityNote {
            category: "Insert/Delete",
            operation: "heap push/pop",
            cost: "O(log n)",
        },
        ComplexityNote {
            category: "Sorting",
            operation: "slice.sort (stable merge sort)",
            cost: "O(n log n)",
        },
        ComplexityNote {
            category: "Sorting",
            operation: "slice.sort_unstable (pdqsort)",
            cost: "O(n log n)",
        },
        ComplexityNote {
            category: "Sorting",
            operation: "select_nth_unstable",
            cost: "O(n) avg",
        },
        ComplexityNote {
            category: "Traversal",
            operation: "iterate any collection",
            cost: "O(n)",
        },
    ];
    NOTES
}

/// Habits that keep large data jobs inside their memory budget.
pub fn memory_tips() -> &'static [&'static str] {
    &[
        "Prefer f32/i32 over f64/i64 when the precision allows it.",
        "Read large files in chunks instead of loading them whole.",
        "Chain iterators so streaming pipelines never materialize.",
        "Memory-map large arrays rather than copying them into RAM.",
        "Store high-dimensional, mostly-zero data in a sparse matrix.",
        "Borrow slices instead of cloning; watch for hidden copies in chained ops.",
        "Intern low-cardinality strings as small integer codes.",
        "Cache expensive intermediates to disk instead of recomputing them.",
    ]
}
