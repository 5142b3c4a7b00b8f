use forward_list::collections::linked::ForwardList;
use log::info;

fn main() {
    env_logger::init();

    println!("\n[ForwardList]\n");

    let mut list = ForwardList::new();
    println!("{list}, empty: {}", list.is_empty());

    for i in [1, 6, 3] {
        list.push_front(i);
        info!("pushed {i}, size is now {}", list.size());
        println!("{list}");
    }

    println!("front: {}", list.front());
    list.pop_front();
    println!("{list}, front: {}", list.front());

    let mut moved = list.take();
    println!("moved: {moved}, source: {list}");

    *moved.front_mut() += 10;
    moved.reverse();
    println!("{moved:?}");

    match list.try_front() {
        Ok(front) => println!("front: {front}"),
        Err(error) => println!("{error}"),
    }
}
