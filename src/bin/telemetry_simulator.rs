// Local telemetry feed for the dashboard: serves random-walk poses for three
// robots plus a joystick status over a WebSocket.

use futures_util::{SinkExt, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{interval, Duration};
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

const ROBOTS: [u32; 3] = [66, 67, 68];
const TICK: Duration = Duration::from_millis(500);

struct RobotWalk {
    id: u32,
    x: f64,
    y: f64,
    heading: f64,
}

impl RobotWalk {
    fn step(&mut self, rng: &mut StdRng) -> Value {
        self.heading += rng.gen_range(-0.5..0.5);
        let speed = rng.gen_range(0.5..3.0);
        self.x += self.heading.cos() * speed;
        self.y += self.heading.sin() * speed;
        json!({
            "robot": {"id": self.id},
            "current_pose": {"pose": {"position": {"x": self.x, "y": self.y, "z": 0.0}}},
            "robot_info": {
                "linear_velocity": speed,
                "angular_velocity": rng.gen_range(-0.6..0.6),
                "linear_acceleration": rng.gen_range(-0.2..0.2),
            }
        })
    }
}

fn joystick_status(rng: &mut StdRng, robot_id: u32) -> Value {
    let mode = if rng.gen_bool(0.8) { 1 } else { 0 };
    json!({
        "joystick": {
            "name": "Simulated pad",
            "connect": true,
            "mode": mode,
            "estop": rng.gen_bool(0.05),
            "angular": rng.gen_range(-0.6..0.6),
            "velocity": rng.gen_range(-1.5..1.5),
            "timeout": 500,
            "set_robot_id": robot_id,
            "broker_ip": "127.0.0.1",
        }
    })
}

async fn serve(stream: TcpStream, peer: SocketAddr) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let socket = tokio_tungstenite::accept_async(stream).await?;
    let (mut sink, mut incoming) = socket.split();
    info!("Dashboard connected from {}", peer);

    let mut rng = StdRng::from_entropy();
    let mut robots: Vec<RobotWalk> = ROBOTS
        .iter()
        .map(|&id| RobotWalk { id, x: 0.5, y: 0.5, heading: rng.gen_range(0.0..std::f64::consts::TAU) })
        .collect();
    let mut ticker = interval(TICK);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for robot in robots.iter_mut() {
                    let frame = robot.step(&mut rng);
                    sink.send(Message::Text(frame.to_string())).await?;
                }
                let controlled = ROBOTS[rng.gen_range(0..ROBOTS.len())];
                sink.send(Message::Text(joystick_status(&mut rng, controlled).to_string())).await?;
            }
            message = incoming.next() => match message {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(_)) => {}
            },
        }
    }

    info!("Dashboard {} disconnected", peer);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| "127.0.0.1:4001".to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Telemetry simulator listening on ws://{}", addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(e) = serve(stream, peer).await {
                warn!("Feed to {} ended: {}", peer, e);
            }
        });
    }
}
